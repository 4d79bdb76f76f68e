use serde_json::json;
use speculate2::speculate;
use tasklist::models::*;

speculate! {
    before {
        let buy_milk = SharedTask::new(Task::new("Buy milk"));
        let clean_room = SharedTask::new(Task::new("Clean room"));
        let go_to_gym = SharedTask::new(Task::new("Go to the gym"));

        let mut todos = TaskList::new("Today's Todos");
        todos.add(buy_milk.clone());
        todos.add(clean_room.clone());
        todos.add(go_to_gym.clone());
    }

    describe "len" {
        it "counts the tasks" {
            assert_eq!(todos.len(), 3);
            assert!(!todos.is_empty());
        }

        it "is zero for a new list" {
            let empty = TaskList::new("Empty");
            assert_eq!(empty.len(), 0);
            assert!(empty.is_empty());
        }
    }

    describe "add" {
        it "appends to the end" {
            let walk = Task::new("Walk dog");
            todos.add(walk.clone());
            assert_eq!(todos.len(), 4);
            assert_eq!(todos.last().unwrap(), walk);
        }

        it "rejects untyped input that is not a task" {
            for bad in [
                json!("This is not a Todo object"),
                json!(1234),
                json!({"name": "tktk", "tasks": []}),
            ] {
                let err = todos.add_value(&bad).unwrap_err();
                assert!(err.is_type_mismatch());
                assert_eq!(todos.len(), 3);
            }
        }

        it "rejects a task whose done flag is not a boolean" {
            let err = todos.add_value(&json!({"title": "Nap", "done": 1})).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(todos.len(), 3);
        }

        it "rejects another serialized list" {
            let another = serde_json::to_value(TaskList::new("tktk")).unwrap();
            assert!(todos.add_value(&another).unwrap_err().is_type_mismatch());
            assert_eq!(todos.len(), 3);
        }
    }

    describe "to_list" {
        it "returns the tasks in order" {
            assert_eq!(todos.to_list(), vec![buy_milk.clone(), clean_room.clone(), go_to_gym.clone()]);
        }

        it "shares tasks with the list" {
            let tasks = todos.to_list();
            tasks[0].set_done(true);
            assert!(todos.first().unwrap().done());
        }
    }

    describe "shared handles" {
        it "reject a non-boolean done and keep state" {
            let first = todos.task_at(0).unwrap();
            let err = first.set_done_value(&json!(1)).unwrap_err();
            assert!(err.is_validation());
            assert!(!todos.task_at(0).unwrap().done());

            todos.mark_done_at(0).unwrap();
            assert!(first.set_done_value(&json!("no")).unwrap_err().is_validation());
            assert!(todos.first().unwrap().done());

            first.set_done_value(&json!(false)).unwrap();
            assert!(!buy_milk.done());
        }

        it "keep a snapshot that does not block list changes" {
            let view = todos.first().unwrap().snapshot();
            todos.mark_done_at(0).unwrap();
            todos.mark_all_undone();
            todos.each(|task| task.set_done(true));

            assert_eq!(view, Task::new("Buy milk"));
            assert!(todos.all_done());
        }
    }

    describe "first and last" {
        it "return the same tasks that were added" {
            assert!(todos.first().unwrap().ptr_eq(&buy_milk));
            assert!(todos.last().unwrap().ptr_eq(&go_to_gym));
        }
    }

    describe "task_at" {
        it "returns the task at the index" {
            assert_eq!(todos.task_at(0).unwrap(), buy_milk);
            assert_eq!(todos.task_at(1).unwrap(), clean_room);
        }

        it "fails out of range" {
            assert!(todos.task_at(666).unwrap_err().is_out_of_range());
            assert!(todos.task_at(-1).unwrap_err().is_out_of_range());
        }

        it "fails for a non-integer index" {
            assert!(todos.task_at("NaN").unwrap_err().is_type_mismatch());
            assert!(todos.task_at(json!(0.5)).unwrap_err().is_type_mismatch());
        }
    }

    describe "mark_done_at" {
        it "marks only that task" {
            todos.mark_done_at(0).unwrap();
            assert!(buy_milk.done());
            assert!(!clean_room.done());
            assert!(todos.task_at(0).unwrap().done());
        }

        it "fails on bad indices" {
            assert!(todos.mark_done_at(666).unwrap_err().is_out_of_range());
            assert!(todos.mark_done_at("NaN").unwrap_err().is_type_mismatch());
        }
    }

    describe "mark_undone_at" {
        it "clears completion" {
            todos.mark_all_done();
            assert!(todos.all_done());
            for idx in 0..todos.len() {
                todos.mark_undone_at(idx).unwrap();
            }
            assert!(!todos.all_done());
            assert!(todos.iter().all(|task| !task.done()));
        }

        it "makes all_done false after a single undo" {
            todos.mark_all_done();
            todos.mark_undone_at(2).unwrap();
            assert!(!todos.all_done());
        }

        it "fails out of range" {
            assert!(todos.mark_undone_at(666).unwrap_err().is_out_of_range());
        }
    }

    describe "mark_all" {
        it "marks every task done" {
            assert!(!todos.all_done());
            todos.mark_all_done();
            assert!(buy_milk.done() && clean_room.done() && go_to_gym.done());
        }

        it "marks every task undone" {
            todos.mark_all_done();
            todos.mark_all_undone();
            assert!(!buy_milk.done() && !clean_room.done() && !go_to_gym.done());
        }

        it "is a no-op on an empty list" {
            let mut empty = TaskList::new("Empty");
            empty.mark_all_done();
            empty.mark_all_undone();
            assert!(empty.is_empty());
        }
    }

    describe "all_done" {
        it "is true for an empty list" {
            assert!(TaskList::new("Empty").all_done());
        }
    }

    describe "remove_at" {
        it "shrinks the list and keeps order" {
            let removed = todos.remove_at(0).unwrap();
            assert!(removed.ptr_eq(&buy_milk));
            assert_eq!(todos.len(), 2);
            assert_eq!(todos.to_list(), vec![clean_room.clone(), go_to_gym.clone()]);
        }

        it "closes the gap in the middle" {
            todos.remove_at(1).unwrap();
            assert_eq!(todos.to_list(), vec![buy_milk.clone(), go_to_gym.clone()]);
        }

        it "fails once the list is empty" {
            while !todos.is_empty() {
                todos.remove_at(0).unwrap();
            }
            assert!(todos.remove_at(0).unwrap_err().is_out_of_range());
        }

        it "fails on bad indices without removing anything" {
            assert!(todos.remove_at(666).unwrap_err().is_out_of_range());
            assert!(todos.remove_at("not a number").unwrap_err().is_type_mismatch());
            assert_eq!(todos.len(), 3);
        }

        it "leaves outside handles usable" {
            todos.remove_at(1).unwrap();
            clean_room.set_done(true);
            assert!(clean_room.done());
            assert_eq!(todos.done_tasks().len(), 0);
        }
    }

    describe "each" {
        it "visits every task in order" {
            let mut titles = Vec::new();
            todos.each(|task| titles.push(task.title()));
            assert_eq!(titles, vec!["Buy milk", "Clean room", "Go to the gym"]);
        }

        it "lets the callback change tasks in place" {
            assert!(!todos.all_done());
            todos.each(|task| task.set_done(true));
            assert!(todos.all_done());
        }
    }

    describe "select" {
        it "keeps matching tasks in order" {
            let sublist = todos.select(|task| task.render().contains('y'));

            let mut expected = TaskList::new(todos.name());
            expected.add(buy_milk.clone());
            expected.add(go_to_gym.clone());

            assert_eq!(expected.to_list(), sublist.to_list());
            assert_eq!(sublist.name(), SUBSET_NAME);
            assert_eq!(todos.len(), 3);
        }

        it "can keep a caller-chosen name" {
            let sublist = todos.select_named(todos.name(), |task| task.title().contains("room"));
            assert_eq!(sublist.name(), "Today's Todos");
            assert!(sublist.first().unwrap().ptr_eq(&clean_room));
        }

        it "calls the predicate once per task" {
            let mut calls = 0;
            todos.select(|_| {
                calls += 1;
                false
            });
            assert_eq!(calls, 3);
        }
    }

    describe "render" {
        it "shows the header and each task" {
            let expected = "----- Today's Todos -----\n\
                            [ ] Buy milk\n\
                            [ ] Clean room\n\
                            [ ] Go to the gym";
            assert_eq!(todos.to_string(), expected);
        }

        it "shows a done task" {
            todos.mark_done_at(1).unwrap();
            let expected = "----- Today's Todos -----\n\
                            [ ] Buy milk\n\
                            [X] Clean room\n\
                            [ ] Go to the gym";
            assert_eq!(todos.render(), expected);
        }

        it "shows all done tasks" {
            todos.mark_all_done();
            let expected = "----- Today's Todos -----\n\
                            [X] Buy milk\n\
                            [X] Clean room\n\
                            [X] Go to the gym";
            assert_eq!(todos.to_string(), expected);
        }

        it "is the header alone for an empty list" {
            assert_eq!(TaskList::new("Nothing").to_string(), "----- Nothing -----");
        }
    }

    describe "scenarios" {
        it "renders a list built with a done task" {
            let mut list = TaskList::new("Today's Todos");
            list.add(Task::new("Buy milk"));
            list.add(Task::with_done("Clean room", true));
            list.add(Task::new("Go to gym"));

            assert_eq!(
                list.to_string(),
                "----- Today's Todos -----\n[ ] Buy milk\n[X] Clean room\n[ ] Go to gym"
            );

            list.mark_all_done();
            assert!(list.all_done());
            assert_eq!(
                list.to_string(),
                "----- Today's Todos -----\n[X] Buy milk\n[X] Clean room\n[X] Go to gym"
            );

            let subset = list.select(|task| task.render().contains('y'));
            let titles: Vec<String> = subset.iter().map(SharedTask::title).collect();
            assert_eq!(titles, vec!["Buy milk", "Go to gym"]);
        }
    }
}
