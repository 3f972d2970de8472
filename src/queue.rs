//! Array-backed binary heap ordered by an arbitrary predicate, and a priority queue on top of it.
//!
//! `better(a, b)` returning `true` means `a` belongs closer to the front. Use `>` for a
//! max-heap and `<` for a min-heap. Elements the predicate considers equal come out in
//! whatever order their position in the tree yields.

/// Binary heap ordered by a `better` predicate
#[derive(Clone)]
pub struct Heap<T, F> {
    nodes: Vec<T>,
    better: F,
}

impl<T, F: Fn(&T, &T) -> bool> Heap<T, F> {
    /// Empty heap
    pub fn new(better: F) -> Self {
        Self {
            nodes: Vec::new(),
            better,
        }
    }

    /// Heapifies `nodes` bottom-up in O(n)
    pub fn from_vec(nodes: Vec<T>, better: F) -> Self {
        let mut heap = Self { nodes, better };
        for index in (0..heap.nodes.len() / 2).rev() {
            heap.sift_down(index, heap.nodes.len());
        }
        heap
    }

    /// Nodes in heap order
    pub fn elements(&self) -> &[T] {
        &self.nodes
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the heap is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The front element
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Adds an element in O(log n)
    pub fn insert(&mut self, value: T) {
        self.nodes.push(value);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Removes the front element in O(log n)
    pub fn remove(&mut self) -> Option<T> {
        if self.nodes.is_empty() {
            return None;
        }
        let value = self.nodes.swap_remove(0);
        let len = self.nodes.len();
        self.sift_down(0, len);
        Some(value)
    }

    /// Removes the element at `index` in O(log n)
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.nodes.len() {
            return None;
        }
        let last = self.nodes.len() - 1;
        if index != last {
            self.nodes.swap(index, last);
            self.sift_down(index, last);
            self.sift_up(index);
        }
        self.nodes.pop()
    }

    /// Replaces the element at `index`, restoring the heap order. Out of range indices are ignored.
    pub fn replace(&mut self, index: usize, value: T) {
        if self.remove_at(index).is_some() {
            self.insert(value);
        }
    }

    /// Gives up the nodes in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.nodes
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if !(self.better)(&self.nodes[child], &self.nodes[parent]) {
                break;
            }
            self.nodes.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize, end: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut first = index;
            if left < end && (self.better)(&self.nodes[left], &self.nodes[first]) {
                first = left;
            }
            if right < end && (self.better)(&self.nodes[right], &self.nodes[first]) {
                first = right;
            }
            if first == index {
                return;
            }
            self.nodes.swap(index, first);
            index = first;
        }
    }
}

impl<T: PartialEq, F: Fn(&T, &T) -> bool> Heap<T, F> {
    /// Position of the first node equal to `value`, in O(n)
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.nodes.iter().position(|node| node == value)
    }
}

/// Priority queue backed by a [`Heap`]
#[derive(Clone)]
pub struct PriorityQueue<T, F> {
    heap: Heap<T, F>,
}

impl<T, F: Fn(&T, &T) -> bool> PriorityQueue<T, F> {
    /// Empty queue. Pass `|a, b| a > b` for a max-priority queue.
    pub fn new(better: F) -> Self {
        Self {
            heap: Heap::new(better),
        }
    }

    /// Number of queued elements
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The element that would be dequeued next
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Adds an element
    pub fn enqueue(&mut self, value: T) {
        self.heap.insert(value);
    }

    /// Removes the highest priority element
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.remove()
    }

    /// Removes the element at `index` of [`elements`](Self::elements)
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.heap.remove_at(index)
    }

    /// Replaces the element at `index` of [`elements`](Self::elements) with a new value
    pub fn change_priority(&mut self, index: usize, value: T) {
        self.heap.replace(index, value);
    }

    /// Queued elements in heap order
    pub fn elements(&self) -> &[T] {
        self.heap.elements()
    }

    /// Gives up the queued elements in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_vec()
    }
}

impl<T: PartialEq, F: Fn(&T, &T) -> bool> PriorityQueue<T, F> {
    /// Position of `value` in [`elements`](Self::elements)
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.heap.index_of(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T, F: Fn(&T, &T) -> bool>(mut queue: PriorityQueue<T, F>) -> Vec<T> {
        std::iter::from_fn(|| queue.dequeue()).collect()
    }

    #[test]
    fn dequeues_in_priority_order() {
        let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a > b);
        for value in [5, 1, 9, 3, 7, 3, 0] {
            queue.enqueue(value);
        }
        assert_eq!(queue.len(), 7);
        assert_eq!(queue.peek(), Some(&9));
        assert_eq!(drain(queue), vec![9, 7, 5, 3, 3, 1, 0]);
    }

    #[test]
    fn min_queue() {
        let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a < b);
        for value in [5, 1, 9] {
            queue.enqueue(value);
        }
        assert_eq!(drain(queue), vec![1, 5, 9]);
    }

    #[test]
    fn empty_queue() {
        let mut queue = PriorityQueue::new(|a: &u8, b: &u8| a > b);
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.remove(0), None);
    }

    #[test]
    fn removes_arbitrary_index() {
        let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a > b);
        for value in 0..20 {
            queue.enqueue(value);
        }
        let index = queue.index_of(&13).unwrap();
        assert_eq!(queue.remove(index), Some(13));
        let index = queue.index_of(&19).unwrap();
        assert_eq!(queue.remove(index), Some(19));
        assert_eq!(queue.index_of(&13), None);

        let expected: Vec<i32> = (0..19).rev().filter(|&v| v != 13).collect();
        assert_eq!(drain(queue), expected);
    }

    #[test]
    fn changes_priority() {
        let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a > b);
        for value in [10, 20, 30] {
            queue.enqueue(value);
        }
        let index = queue.index_of(&10).unwrap();
        queue.change_priority(index, 40);
        queue.change_priority(99, 1);
        assert_eq!(drain(queue), vec![40, 30, 20]);
    }

    #[test]
    fn heapifies_existing_vector() {
        let mut heap = Heap::from_vec(vec![3, 8, 1, 9, 4, 4, 7], |a: &i32, b: &i32| a > b);
        assert_eq!(heap.peek(), Some(&9));
        let drained: Vec<i32> = std::iter::from_fn(|| heap.remove()).collect();
        assert_eq!(drained, vec![9, 8, 7, 4, 4, 3, 1]);
    }
}
