#![cfg(all(test, feature = "linked", feature = "segmented", feature = "tiered"))]

use std::collections::VecDeque;

use super::*;
use crate::collections::circ::{BufferPolicy, OverflowPolicy, RingBuffer};
use crate::collections::linked::{DoublyLinkedList, LinkedList};
use crate::collections::segmented::SegmentedList;
use crate::collections::tiered::TieredArray;
use crate::util::error::{FullCollection, ZeroCapacity};
use crate::util::panic::assert_panics;

#[test]
fn test_stack_back() {
    let mut stack: Stack<_> = Stack::new();
    assert_eq!(stack.top(), None);
    assert_eq!(stack.try_pop(), Err(EmptyCollection));

    for i in 0..5 {
        stack.push(i);
    }
    *stack.top_mut().unwrap() = 40;
    assert_eq!(stack.len(), 5);
    assert_eq!(stack.pop(), Some(40));
    assert_eq!(stack.top(), Some(&3));
    assert_eq!(
        stack.underlying().iter().copied().collect::<Vec<_>>(),
        [0, 1, 2, 3],
        "A back-ended stack should keep its bottom at the front of the container.",
    );

    stack.clear();
    assert!(stack.is_empty());
}

#[test]
fn test_stack_front() {
    let mut stack: Stack<_, LinkedList<_>, Front> = Stack::new();
    stack.push('a');
    stack.push('b');
    stack.push('c');
    assert_eq!(stack.top(), Some(&'c'));
    assert_eq!(stack.pop(), Some('c'));

    let list = stack.into_inner();
    assert_eq!(list.front(), Some(&'b'), "The top of a front-ended stack is the front.");
    assert_eq!(list.back(), Some(&'a'));

    let mut stack: Stack<_, LinkedList<_>, Front> = Stack::from_container(list);
    assert_eq!(stack.pop(), Some('b'));
    assert_eq!(stack.pop(), Some('a'));
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_stack_over_each_container() {
    fn exercise<C, E>(mut stack: Stack<u32, C, E>)
    where
        C: crate::collections::traits::Sequence,
        E: StackEnd<u32, C>,
    {
        for i in 0..20 {
            stack.push(i);
        }
        for i in (0..20).rev() {
            assert_eq!(stack.pop(), Some(i), "Stacks should pop in reverse push order.");
        }
        assert!(stack.is_empty());
    }

    exercise(Stack::<_, RingBuffer<_>, Back>::new());
    exercise(Stack::<_, RingBuffer<_>, Front>::new());
    exercise(Stack::<_, TieredArray<_>, Back>::new());
    exercise(Stack::<_, SegmentedList<_>, Front>::new());
    exercise(Stack::<_, DoublyLinkedList<_>, Back>::new());
}

#[test]
fn test_stack_fixed_container() {
    let buf = RingBuffer::with_policy(2, BufferPolicy::fixed(OverflowPolicy::ThrowOnFull));
    let mut stack: Stack<_, RingBuffer<_>> = Stack::from_container(buf);
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.try_push(3), Err(PushError::Full(FullCollection { cap: 2 })));
    assert_panics!({
        let buf = RingBuffer::with_policy(0, BufferPolicy::fixed(OverflowPolicy::ThrowOnFull));
        Stack::<_, RingBuffer<_>>::from_container(buf).push(1);
    });
    assert_eq!(stack.pop(), Some(2));
}

#[test]
fn test_queue_orders() {
    let mut queue: Queue<_> = Queue::new();
    queue.push(1);
    queue.push(2);
    queue.push(3);
    assert_eq!(queue.front(), Some(&1));
    assert_eq!(queue.back(), Some(&3));
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.len(), 2);

    let mut queue: Queue<_, DoublyLinkedList<_>, FrontToBack> = Queue::new();
    queue.push(1);
    queue.push(2);
    queue.push(3);
    assert_eq!(queue.front(), Some(&1), "The front should be the next element popped.");
    assert_eq!(queue.back(), Some(&3), "The back should be the last element pushed.");
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(
        queue.underlying().iter().copied().collect::<Vec<_>>(),
        [3, 2],
        "Pushing to the front of the container should keep the newest element first.",
    );

    let mut queue: Queue<_, LinkedList<_>> = Queue::new();
    for i in 0..10 {
        queue.push(i);
    }
    for i in 0..10 {
        assert_eq!(queue.pop(), Some(i));
    }
    assert_eq!(queue.try_pop(), Err(EmptyCollection));
    assert_eq!(queue.front(), None);
    assert_eq!(queue.back(), None);
}

#[test]
fn test_queue_fixed_buffer() {
    let buf = RingBuffer::with_policy(3, BufferPolicy::fixed(OverflowPolicy::ThrowOnFull));
    let mut queue: Queue<_> = Queue::from_container(buf);
    for i in 0..3 {
        queue.push(i);
    }
    assert_eq!(
        queue.try_push(3),
        Err(PushError::Full(FullCollection { cap: 3 })),
        "A full fixed buffer should reject the push rather than drop an element.",
    );
    assert_eq!(queue.pop(), Some(0));
    assert!(queue.try_push(3).is_ok());
    assert_eq!(queue.back(), Some(&3));

    let empty = RingBuffer::with_policy(0, BufferPolicy::fixed(OverflowPolicy::ThrowOnFull));
    let mut queue: Queue<u8> = Queue::from_container(empty);
    assert_eq!(queue.try_push(0), Err(PushError::ZeroCapacity(ZeroCapacity)));
}

#[test]
fn test_queue_value_semantics() {
    let mut queue: Queue<_> = Queue::new();
    queue.push(String::from("a"));
    let copy = queue.clone();
    assert_eq!(copy, queue);

    queue.push(String::from("b"));
    assert_ne!(copy, queue, "Clones should be independent.");
    assert_eq!(copy.len(), 1);

    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(copy.into_inner().front().map(String::as_str), Some("a"));
}

#[test]
fn test_deque_push_pop() {
    let mut deque: Deque<_> = Deque::new();
    assert_eq!(deque.front(), None);
    assert_eq!(deque.back(), None);
    assert_eq!(deque.try_pop_front(), Err(EmptyCollection));
    assert_eq!(deque.try_pop_back(), Err(EmptyCollection));

    deque.push_back(1);
    assert_eq!(deque.front(), Some(&1), "A single element should be both the front and back.");
    assert_eq!(deque.back(), Some(&1));
    assert_eq!(deque.pop_front(), Some(1));
    assert!(deque.is_empty());

    deque.push_front(1);
    assert_eq!(deque.pop_back(), Some(1));
    assert_eq!(deque.pop_back(), None);
}

#[test]
fn test_deque_rebalance() {
    let mut deque: Deque<_> = Deque::new();
    for i in 0..8 {
        deque.push_back(i);
        let (front, back) = deque.halves();
        assert!(
            deque.len() < 2 || (3 * front.len() >= back.len() && 3 * back.len() >= front.len()),
            "Neither half should exceed three times the other, but got {} and {}.",
            front.len(),
            back.len(),
        );
    }

    let (front, back) = deque.halves();
    assert_eq!(front.top(), Some(&0), "The front half's top should be the first element.");
    assert_eq!(back.top(), Some(&7), "The back half's top should be the last element.");

    // Drain entirely from the back, forcing the front half to be split.
    for i in (0..8).rev() {
        assert_eq!(deque.pop_back(), Some(i));
        let (front, back) = deque.halves();
        assert!(deque.len() < 2 || (3 * front.len() >= back.len() && 3 * back.len() >= front.len()));
    }
    assert!(deque.is_empty());
}

#[test]
fn test_deque_split() {
    let mut deque: Deque<_> = Deque::new();
    deque.push_back(0);
    deque.push_back(1);
    assert_eq!(
        (deque.halves().0.len(), deque.halves().1.len()),
        (1, 1),
        "Two elements should be split one to each half.",
    );

    let mut deque: Deque<_> = Deque::new();
    deque.extend(0..5);
    let (front, back) = deque.halves();
    assert!(front.len() <= back.len(), "The front half should get the smaller share.");
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
}

#[test]
fn test_deque_against_model() {
    let mut state = 0x9e37_79b9_u64;
    let mut next = |bound: u64| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state % bound
    };

    let mut deque: Deque<_> = Deque::new();
    let mut model = VecDeque::new();
    for step in 0..3000 {
        match next(5) {
            0 => {
                deque.push_front(step);
                model.push_front(step);
            },
            1 => {
                deque.push_back(step);
                model.push_back(step);
            },
            2 => assert_eq!(deque.pop_front(), model.pop_front()),
            3 => assert_eq!(deque.pop_back(), model.pop_back()),
            _ => {
                if !model.is_empty() {
                    let index = next(model.len() as u64) as usize;
                    assert_eq!(deque.get(index), model.get(index));
                }
            },
        }
        assert_eq!(deque.len(), model.len());
        assert_eq!(deque.front(), model.front());
        assert_eq!(deque.back(), model.back());
    }
    assert!(deque.iter().eq(model.iter()));
    assert!(deque.iter().rev().eq(model.iter().rev()));
}

#[test]
fn test_deque_access() {
    let deque: Deque<_> = (0..10).collect();
    for i in 0..10 {
        assert_eq!(deque.get(i), Some(&i), "Index {i} should be found in either half.");
    }
    assert_eq!(deque.try_get(10), Err(IndexOutOfBounds { index: 10, len: 10 }));

    let tiered: Deque<_, TieredArray<_>> = (0..10).collect();
    assert!(tiered.iter().copied().eq(0..10));
    assert_eq!(tiered.get(3), Some(&3));
}

#[test]
fn test_deque_value_semantics() {
    let mut deque: Deque<_> = (0..6).collect();
    let copy = deque.clone();
    deque.push_front(-1);
    assert_eq!(copy.len(), 6, "Clones should be independent.");

    let mut other: Deque<_> = Deque::new();
    other.swap(&mut deque);
    assert!(deque.is_empty());
    assert_eq!(other.front(), Some(&-1));

    other.clear();
    assert!(other.is_empty());
    assert_eq!(
        format!("{:?}", Deque::<i32>::new()),
        "Deque { front: DynamicArray { contents: [], len: 0, cap: 0 }, \
         back: DynamicArray { contents: [], len: 0, cap: 0 } }",
    );
}
