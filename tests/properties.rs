use ds_primer::{
    complexity::{binary_search, bubble_sort, merge_sort},
    BinaryTree, DynamicSequence, Graph, LinkedList, Nodelike, Order, Queue, Stack,
};
use itertools::Itertools;
use proptest::prelude::*;
use std::collections::VecDeque;

/// No node has a child after a missing slot in level order
fn is_complete<T>(tree: &BinaryTree<T>) -> bool {
    tree.nodes_in(Order::LevelOrder)
        .flat_map(|node| [node.left(), node.right()])
        .skip_while(Option::is_some)
        .all(|slot| slot.is_none())
}

/// Reference implementation of a Python slice bound
fn python_bound(index: isize, len: usize) -> usize {
    let len = len as isize;
    let resolved = if index < 0 { index + len } else { index };
    resolved.clamp(0, len) as usize
}

proptest! {
    /// `pop` always returns the most recently pushed value not yet popped
    #[test]
    fn prop_stack_is_lifo(ops in prop::collection::vec(prop::option::of(any::<i32>()), 0..64)) {
        let mut stack = Stack::new();
        let mut model = vec![];
        for op in ops {
            match op {
                Some(value) => {
                    stack.push(value);
                    model.push(value);
                }
                None => prop_assert_eq!(stack.pop(), model.pop()),
            }
            prop_assert_eq!(stack.peek(), model.last());
            prop_assert_eq!(stack.size(), model.len());
        }
    }

    #[test]
    fn prop_queue_is_fifo(ops in prop::collection::vec(prop::option::of(any::<i32>()), 0..64)) {
        let mut queue = Queue::new();
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                Some(value) => {
                    queue.enqueue(value);
                    model.push_back(value);
                }
                None => prop_assert_eq!(queue.dequeue(), model.pop_front()),
            }
            prop_assert_eq!(queue.front(), model.front());
            prop_assert_eq!(queue.size(), model.len());
        }
    }

    #[test]
    fn prop_list_append_prepend_positions(values in prop::collection::vec(any::<i16>(), 1..32), extra: i16) {
        let mut list: LinkedList<i16> = values.iter().copied().collect();

        list.append(extra);
        prop_assert_eq!(list.value_at(list.len() - 1), Some(&extra));

        list.prepend(extra);
        prop_assert_eq!(list.value_at(0), Some(&extra));
        prop_assert_eq!(list.len(), values.len() + 2);
    }

    #[test]
    fn prop_list_delete_missing_key(values in prop::collection::vec(0..100u8, 0..32), key in 100..=255u8) {
        let mut list: LinkedList<u8> = values.iter().copied().collect();
        prop_assert!(!list.delete_node(&key));
        prop_assert_eq!(list.iter().copied().collect_vec(), values);
    }

    #[test]
    fn prop_list_delete_first_match(values in prop::collection::vec(0..8u8, 1..32), key in 0..8u8) {
        let mut list: LinkedList<u8> = values.iter().copied().collect();
        let mut model = values.clone();
        let expected = match model.iter().position(|v| *v == key) {
            Some(position) => {
                model.remove(position);
                true
            }
            None => false,
        };
        prop_assert_eq!(list.delete_node(&key), expected);
        prop_assert_eq!(list.iter().copied().collect_vec(), model);
    }

    #[test]
    fn prop_tree_is_complete_and_keeps_values(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let tree: BinaryTree<i32> = values.iter().copied().collect();
        prop_assert!(is_complete(&tree));
        prop_assert_eq!(tree.len(), values.len());
        prop_assert_eq!(tree.level_order_traversal(), values.clone());

        let sorted = values.iter().copied().sorted().collect_vec();
        for traversal in [tree.inorder_traversal(), tree.preorder_traversal(), tree.postorder_traversal()] {
            prop_assert_eq!(traversal.into_iter().sorted().collect_vec(), sorted.clone());
        }
        for value in &values {
            prop_assert!(tree.search(value));
        }
    }

    #[test]
    fn prop_tree_delete_keeps_shape(values in prop::collection::vec(0..16u8, 1..48), key in 0..16u8) {
        let mut tree: BinaryTree<u8> = values.iter().copied().collect();
        let present = values.contains(&key);
        prop_assert_eq!(tree.delete(&key), present);
        prop_assert!(is_complete(&tree));

        let mut model = values.clone();
        if let Some(position) = model.iter().position(|v| *v == key) {
            model.remove(position);
        }
        prop_assert_eq!(
            tree.level_order_traversal().into_iter().sorted().collect_vec(),
            model.into_iter().sorted().collect_vec()
        );
    }

    #[test]
    fn prop_undirected_reachability_is_symmetric(edges in prop::collection::vec((0..10u8, 0..10u8), 0..30)) {
        let mut graph = Graph::new(false);
        for (from, to) in &edges {
            graph.add_edge(*from, *to);
        }
        for (from, to) in &edges {
            prop_assert!(graph.bfs(from).contains(to));
            prop_assert!(graph.bfs(to).contains(from));
            prop_assert!(graph.dfs(from).contains(to));
        }
        for vertex in graph.vertices() {
            let bfs = graph.bfs(&vertex);
            prop_assert!(bfs.iter().all_unique());
            prop_assert_eq!(
                bfs.into_iter().sorted().collect_vec(),
                graph.dfs(&vertex).into_iter().sorted().collect_vec()
            );
        }
    }

    #[test]
    fn prop_undirected_edges_stay_symmetric(
        edges in prop::collection::vec((0..6u8, 0..6u8), 0..20),
        removals in prop::collection::vec((0..6u8, 0..6u8), 0..20),
    ) {
        let mut graph = Graph::new(false);
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        for (from, to) in &removals {
            graph.remove_edge(from, to);
        }
        for vertex in graph.vertices() {
            for neighbor in graph.neighbors(&vertex).unwrap_or_default() {
                let forward = graph.neighbors(&vertex).unwrap_or_default().iter().filter(|n| *n == neighbor).count();
                let backward = graph.neighbors(neighbor).unwrap_or_default().iter().filter(|n| **n == vertex).count();
                prop_assert_eq!(forward, backward);
            }
        }
    }

    #[test]
    fn prop_directed_double_removal_is_safe(edges in prop::collection::vec((0..6u8, 0..6u8), 1..20)) {
        let mut graph = Graph::new(true);
        for (from, to) in &edges {
            graph.add_edge(*from, *to);
        }
        let (from, to) = edges[0];
        graph.remove_edge(&from, &to);
        graph.remove_edge(&to, &from);
        let snapshot = graph.clone();
        graph.remove_edge(&to, &from);
        graph.remove_edge(&99, &from);
        let remaining = edges.iter().filter(|(f, t)| (*f, *t) == (to, from)).count();
        if remaining == 0 {
            prop_assert_eq!(graph, snapshot);
        }
    }

    #[test]
    fn prop_remove_vertex_leaves_no_dangling_edges(edges in prop::collection::vec((0..6u8, 0..6u8), 0..20), vertex in 0..6u8, directed: bool) {
        let mut graph = Graph::new(directed);
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph.remove_vertex(&vertex);
        prop_assert!(!graph.contains_vertex(&vertex));
        for remaining in graph.vertices() {
            let neighbors = graph.neighbors(&remaining).unwrap_or_default();
            prop_assert!(!neighbors.contains(&vertex));
            prop_assert!(neighbors.iter().all(|n| graph.contains_vertex(n)));
        }
    }

    #[test]
    fn prop_sorts_are_sorted_permutations(values in prop::collection::vec(any::<i32>(), 0..128)) {
        let expected = values.iter().copied().sorted().collect_vec();
        let merged = merge_sort(&values).result;
        let bubbled = bubble_sort(&values).result;
        prop_assert_eq!(merged.as_slice(), expected.as_slice());
        prop_assert_eq!(bubbled.as_slice(), expected.as_slice());

        for target in &values {
            let index = binary_search(merged.as_slice(), target).result;
            prop_assert_eq!(index.map(|i| merged.as_slice()[i]), Some(*target));
        }
    }

    #[test]
    fn prop_slice_matches_python(values in prop::collection::vec(any::<i8>(), 0..16), start in -20..20isize, end in -20..20isize) {
        let seq: DynamicSequence<i8> = values.clone().into();
        let (from, to) = (python_bound(start, values.len()), python_bound(end, values.len()));
        let expected: &[i8] = if from < to { &values[from..to] } else { &[] };
        let sliced = seq.slice(start, end);
        prop_assert_eq!(sliced.as_slice(), expected);
    }
}

#[test]
fn tree_node_handles_follow_shape() {
    let tree: BinaryTree<u8> = (0..10).collect();
    for node in tree.nodes_in(Order::Preorder) {
        for child in node.left().into_iter().chain(node.right()) {
            assert!(tree.node(child).is_some());
        }
        assert_eq!(node.is_leaf(), node.left().is_none());
    }
}
