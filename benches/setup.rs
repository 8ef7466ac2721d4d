use vessel::string::ManagedString;

/// Alphabet containing all characters that may be put into a benchmark string.
const ALPHABET: [u8; 64] = [
    b'a', b'b', b'c', b'd', b'e', b'f', b'g', b'h', b'i', b'j', b'k', b'l', b'm', b'n', b'o', b'p', b'q', b'r',
    b's', b't', b'u', b'v', b'w', b'x', b'y', b'z', b'A', b'B', b'C', b'D', b'E', b'F', b'G', b'H', b'I', b'J',
    b'K', b'L', b'M', b'N', b'O', b'P', b'Q', b'R', b'S', b'T', b'U', b'V', b'W', b'X', b'Y', b'Z', b'0', b'1',
    b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'_', b'-',
];

/// Generates unique words of the same size for benchmark purposes.
struct WordBuilder {
    indices: Vec<u8>,
}

impl WordBuilder {
    fn new(word_len: usize) -> Self {
        Self {
            indices: vec![0x00; word_len],
        }
    }

    fn next_indices(&mut self) -> Option<&[u8]> {
        'l: for index in &mut self.indices {
            if *index == (64 - 1) {
                *index = 0;
                continue 'l;
            }
            *index += 1;
            return Some(&self.indices[..]);
        }
        None
    }

    fn next_word(&mut self) -> Option<ManagedString> {
        self.next_indices().map(|indices| {
            let mut s = ManagedString::new();
            for &index in indices {
                assert!(index < 64);
                s.push(ALPHABET[index as usize]);
            }
            s
        })
    }
}

impl Iterator for WordBuilder {
    type Item = ManagedString;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_word()
    }
}

/// Generates a vector of `len` unique managed strings of the same length.
pub fn generate_test_strings(len: usize, word_len: usize) -> Vec<ManagedString> {
    let words = WordBuilder::new(word_len).take(len).collect::<Vec<_>>();
    assert_eq!(words.len(), len);
    assert_eq!(words[0].len(), word_len);
    words
}

/// The number of elements inserted in the fill/already-filled benchmarks.
pub const BENCH_LEN_ELEMENTS: usize = 100_000;

/// The length of a single generated managed string.
pub const BENCH_STRING_LEN: usize = 5;
