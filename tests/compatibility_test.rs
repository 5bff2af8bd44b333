use burstsort::KeyAccessor;
use burstsort::prelude::*;

// Simulate an external columnar struct (like an Arrow string array).
struct MockArrowArray {
    data: Vec<u8>,
    offsets: Vec<usize>,
}

impl MockArrowArray {
    fn new(strings: &[&str]) -> Self {
        let mut data = Vec::new();
        let mut offsets = vec![0];
        for s in strings {
            data.extend_from_slice(s.as_bytes());
            offsets.push(data.len());
        }
        Self { data, offsets }
    }
}

// Implement KeyAccessor for the external struct.
// This proves the trait is implementable by "outside crates".
impl KeyAccessor for MockArrowArray {
    fn get_key(&self, index: usize) -> &[u8] {
        let start = self.offsets[index];
        let end = self.offsets[index + 1];
        &self.data[start..end]
    }

    fn len(&self) -> usize {
        self.offsets.len() - 1
    }
}

#[test]
fn test_external_struct_compatibility() {
    let mock = MockArrowArray::new(&["foo", "bar", "baz"]);

    // sorted: bar (1), baz (2), foo (0)
    assert_eq!(burstsort(&mock), vec![1, 2, 0]);
    assert_eq!(redesigned_burstsort(&mock), vec![1, 2, 0]);
    assert_eq!(lazy_funnelsort(&mock), vec![1, 2, 0]);
    assert_eq!(multikey_quicksort(&mock), vec![1, 2, 0]);
}

#[test]
fn test_external_struct_parallel() {
    let strings: Vec<String> = (0..5000).map(|i| format!("key-{:05}", 4999 - i)).collect();
    let refs: Vec<&str> = strings.iter().map(|s| s.as_str()).collect();
    let mock = MockArrowArray::new(&refs);

    let serial = burstsort(&mock);
    let parallel = burstsort_parallel(&mock, None).unwrap();
    assert_eq!(serial, parallel);

    for window in serial.windows(2) {
        assert!(mock.get_key(window[0]) <= mock.get_key(window[1]));
    }
}
