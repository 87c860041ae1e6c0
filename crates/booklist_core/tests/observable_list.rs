use booklist_core::{
    Book, ChangeObserver, ChangeOperation, CollectionError, DispatchQueue, ObservableList,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Recorder {
    ops: RefCell<Vec<ChangeOperation>>,
    reloads: RefCell<usize>,
}

impl ChangeObserver for Recorder {
    fn full_reload(&self) {
        *self.reloads.borrow_mut() += 1;
    }

    fn apply(&self, operation: ChangeOperation) {
        self.ops.borrow_mut().push(operation);
    }
}

impl Recorder {
    fn take(&self) -> Vec<ChangeOperation> {
        std::mem::take(&mut *self.ops.borrow_mut())
    }
}

fn book(n: i64) -> Book {
    Book::new(format!("Title {n}"), format!("Author {n}"), 1900 + n)
}

fn observed_list(seed: Vec<Book>) -> (ObservableList<Book>, Rc<Recorder>) {
    let recorder = Rc::new(Recorder::default());
    let observer: Rc<dyn ChangeObserver> = recorder.clone();
    let mut list = ObservableList::new(seed, DispatchQueue::new());
    list.set_observer(Rc::downgrade(&observer));
    (list, recorder)
}

fn bracket(op: ChangeOperation) -> Vec<ChangeOperation> {
    vec![ChangeOperation::BeginBatch, op, ChangeOperation::EndBatch]
}

#[test]
fn add_inserts_at_previous_length() {
    let (mut list, recorder) = observed_list(vec![book(1), book(2)]);

    let index = list.add(book(3));
    list.queue().run_pending();

    assert_eq!(index, 2);
    assert_eq!(list.get(2), Some(&book(3)));
    assert_eq!(recorder.take(), bracket(ChangeOperation::Insert(2)));
}

#[test]
fn replace_keeps_length_and_overwrites() {
    let (mut list, recorder) = observed_list(vec![book(1), book(2)]);

    list.replace(book(9), 1).unwrap();
    list.queue().run_pending();

    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1), Some(&book(9)));
    assert_eq!(list.get(0), Some(&book(1)));
    assert_eq!(recorder.take(), bracket(ChangeOperation::Update(1)));
}

#[test]
fn delete_shifts_following_elements_left() {
    let (mut list, recorder) = observed_list(vec![book(1), book(2), book(3), book(4)]);

    assert_eq!(list.delete(1).unwrap(), book(2));
    list.queue().run_pending();

    assert_eq!(list.as_slice(), &[book(1), book(3), book(4)]);
    assert_eq!(recorder.take(), bracket(ChangeOperation::Delete(1)));
}

#[test]
fn out_of_range_index_is_an_explicit_failure() {
    let (mut list, recorder) = observed_list(vec![book(1), book(2)]);

    let replace_err = list.replace(book(9), 2).unwrap_err();
    assert_eq!(replace_err, CollectionError::IndexOutOfRange { index: 2, len: 2 });
    let delete_err = list.delete(usize::MAX).unwrap_err();
    assert_eq!(
        delete_err,
        CollectionError::IndexOutOfRange {
            index: usize::MAX,
            len: 2
        }
    );
    assert_eq!(
        replace_err.to_string(),
        "index 2 out of range for list of length 2"
    );

    assert_eq!(list.queue().run_pending(), 0);
    assert!(recorder.take().is_empty());
    assert_eq!(list.as_slice(), &[book(1), book(2)]);
}

#[test]
fn empty_list_rejects_every_index() {
    let (mut list, _recorder) = observed_list(Vec::new());
    assert!(list.is_empty());
    assert!(list.replace(book(1), 0).is_err());
    assert!(list.delete(0).is_err());
}

#[test]
fn length_tracks_adds_and_deletes_over_a_mixed_sequence() {
    let seed = vec![book(1), book(2)];
    let (mut list, recorder) = observed_list(seed.clone());
    let mut adds = 0;
    let mut deletes = 0;

    for step in 0..20_i64 {
        match step % 4 {
            0 | 1 => {
                list.add(book(100 + step));
                adds += 1;
            }
            2 => {
                let index = (step as usize * 7) % list.len();
                list.replace(book(200 + step), index).unwrap();
            }
            _ => {
                let index = (step as usize * 3) % list.len();
                list.delete(index).unwrap();
                deletes += 1;
            }
        }
    }
    list.queue().run_pending();

    assert_eq!(list.len(), seed.len() + adds - deletes);
    let ops = recorder.take();
    assert_eq!(ops.len(), 20 * 3);
    for chunk in ops.chunks(3) {
        assert_eq!(chunk[0], ChangeOperation::BeginBatch);
        assert!(!chunk[1].is_batch_marker());
        assert_eq!(chunk[2], ChangeOperation::EndBatch);
    }
}

#[test]
fn brackets_are_delivered_in_mutation_order() {
    let (mut list, recorder) = observed_list(vec![book(1)]);

    list.add(book(2));
    list.delete(0).unwrap();
    list.replace(book(3), 0).unwrap();
    assert_eq!(list.queue().pending(), 3);
    list.queue().run_pending();

    let mut expected = bracket(ChangeOperation::Insert(1));
    expected.extend(bracket(ChangeOperation::Delete(0)));
    expected.extend(bracket(ChangeOperation::Update(0)));
    assert_eq!(recorder.take(), expected);
}

#[test]
fn reset_replaces_content_and_requests_full_reload() {
    let (mut list, recorder) = observed_list(vec![book(1)]);

    list.reset(vec![book(7), book(8), book(9)]);
    list.queue().run_pending();

    assert_eq!(list.len(), 3);
    assert_eq!(*recorder.reloads.borrow(), 1);
    assert!(recorder.take().is_empty());
}

#[test]
fn cleared_observer_stops_delivery() {
    let (mut list, recorder) = observed_list(vec![book(1)]);

    list.clear_observer();
    list.add(book(2));

    assert_eq!(list.queue().run_pending(), 0);
    assert!(recorder.take().is_empty());
    assert_eq!(list.len(), 2);
}

#[test]
fn observer_is_not_kept_alive_by_the_list() {
    let (mut list, recorder) = observed_list(vec![book(1)]);
    assert!(list.has_observer());

    drop(recorder);
    assert!(!list.has_observer());
    list.add(book(2));
    assert!(list.queue().is_idle());
}
