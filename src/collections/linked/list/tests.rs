#![cfg(test)]

use super::*;
use crate::util::alloc::LiveCounter;
use crate::util::panic::assert_panics;

fn contents<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_push_pop() {
    let mut list = LinkedList::new();
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.try_pop_front(), Err(EmptyCollection));
    assert_eq!(list.back(), None);

    list.push_back(1);
    list.push_front(0);
    list.push_back(2);
    list.verify_links();
    assert_eq!(contents(&list), [0, 1, 2]);

    *list.front_mut().unwrap() = 10;
    *list.back_mut().unwrap() = 12;
    assert_eq!(list.pop_front(), Some(10));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.back(), Some(&12), "Popping shouldn't disturb the tail.");
    assert_eq!(list.pop_front(), Some(12));
    list.verify_links();
    assert!(list.is_empty());

    list.push_back(5);
    assert_eq!(list.front(), list.back(), "A single node should be both the head and tail.");
    list.verify_links();
}

#[test]
fn test_insert_remove() {
    let mut list: LinkedList<_> = (0..5).collect();
    let mut model: Vec<_> = (0..5).collect();

    for (index, value) in [(5, 10), (0, 11), (3, 12), (7, 13)] {
        list.insert(index, value);
        model.insert(index, value);
        list.verify_links();
        assert_eq!(contents(&list), model, "Inserting at {index} should match a Vec.");
    }

    for index in [8, 0, 3, 5] {
        assert_eq!(list.remove(index), model.remove(index));
        list.verify_links();
        assert_eq!(contents(&list), model, "Removing at {index} should match a Vec.");
    }

    list.push_back(20);
    model.push(20);
    assert_eq!(contents(&list), model, "Removing the last node should move the tail back.");

    assert_eq!(list.try_insert(7, 0), Err(IndexOutOfBounds { index: 7, len: 6 }));
    assert_eq!(list.try_remove(6), Err(IndexOutOfBounds { index: 6, len: 6 }));
    assert_eq!(contents(&list), model, "Failed operations shouldn't change the list.");

    assert_panics!({
        let mut list: LinkedList<u8> = LinkedList::new();
        list.remove(0);
    });
}

#[test]
fn test_access() {
    let mut list: LinkedList<_> = (0..6).collect();
    list[2] = 20;
    *list.get_mut(5).unwrap() = 50;
    assert_eq!(list.replace(0, 100), 0);
    assert_eq!(list.get(6), None);
    assert_eq!(list.try_get(9), Err(IndexOutOfBounds { index: 9, len: 6 }));
    assert_eq!(contents(&list), [100, 1, 20, 3, 4, 50]);
    assert_eq!(list.index_of(&20), Some(2));
    assert!(!list.contains(&2));
}

#[test]
fn test_iterators() {
    let mut list: LinkedList<_> = (1..=4).collect();
    for value in &mut list {
        *value *= 3;
    }

    let mut iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&3));
    let rest = iter.clone();
    assert_eq!(iter.len(), 3);
    assert_eq!(rest.copied().collect::<Vec<_>>(), [6, 9, 12]);

    let counter = LiveCounter::new();
    let list: LinkedList<_> = (0..5).map(|i| counter.track(i)).collect();
    let mut iter = list.into_iter();
    assert_eq!(iter.next().map(|t| t.value), Some(0));
    assert_eq!(iter.len(), 4);
    drop(iter);
    assert_eq!(counter.live(), 0, "Dropping an owned iterator should drop the rest.");
}

#[test]
fn test_value_semantics() {
    let counter = LiveCounter::new();
    let mut original: LinkedList<_> = (0..3).map(|i| counter.track(i)).collect();

    let mut copy = original.clone();
    assert_eq!(copy, original);
    copy[1].value = 7;
    assert_ne!(copy, original, "Mutating a clone shouldn't affect the original.");

    let moved = std::mem::take(&mut original);
    assert_eq!(moved.len(), 3);
    original.push_back(counter.track(3));
    original.verify_links();

    original.swap(&mut copy);
    assert_eq!(original.len(), 3);
    assert_eq!(copy.len(), 1);

    drop((original, copy, moved));
    assert_eq!(counter.live(), 0, "Every element should be dropped exactly once.");
}

#[test]
fn test_format() {
    let list: LinkedList<_> = ['a', 'b'].into_iter().collect();
    assert_eq!(format!("{list}"), "('a') -> ('b')");
    assert_eq!(format!("{list:?}"), "LinkedList { contents: ['a', 'b'], len: 2 }");
}
