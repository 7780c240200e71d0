use arg_rail::prelude::*;
use std::thread;

#[test]
fn test_threads_append_without_losing_failures() {
    let validation = begin();

    thread::scope(|s| {
        for t in 0..8 {
            let validation = &validation;
            s.spawn(move || {
                for i in 0..100 {
                    validation.record(Failure::custom(format!("t{t}"), format!("failure {i}")));
                }
            });
        }
    });

    let err = validation.finish().unwrap_err();
    assert_eq!(err.len(), 800);

    for t in 0..8 {
        let name = format!("t{t}");
        let messages: Vec<_> =
            err.iter().filter(|failure| failure.name() == name).map(Failure::message).collect();
        let expected: Vec<_> = (0..100).map(|i| format!("failure {i}")).collect();
        assert_eq!(messages, expected);
    }
}

#[test]
fn test_clones_moved_into_threads_share_the_list() {
    let validation = begin();

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let validation = validation.clone();
            thread::spawn(move || {
                let name = format!("worker_{t}");
                validation.check_true(false, &name).map(drop)
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(validation.finish().unwrap_err().len(), 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_tasks_share_one_accumulator() {
    let validation = begin();

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let validation = validation.clone();
            tokio::spawn(async move {
                let name = format!("field_{i}");
                validation.gate_on(i % 2 == 0).check_not_null(None::<u8>, &name).map(drop)
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let err = validation.finish().unwrap_err();
    assert_eq!(err.len(), 8);
    assert!(err.iter().all(|failure| failure.kind() == FailureKind::NullArgument));
}
