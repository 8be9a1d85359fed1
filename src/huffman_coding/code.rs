use std::fmt::{Display, Formatter};

use rustc_hash::FxHashMap;

use super::tree::Node;

/// One codeword: the root-to-leaf path with left = 0 and right = 1, held in
/// the low `len` bits of `bits`, most significant path bit first.
///
/// With counts capped at u32, no leaf can sit deeper than 64 (weights along
/// a root path grow at least as fast as the Fibonacci sequence), so u64
/// storage is always enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codeword {
    pub bits: u64,
    pub len: u8,
}

impl Display for Codeword {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in (0..self.len).rev() {
            write!(f, "{}", (self.bits >> i) & 1)?;
        }
        Ok(())
    }
}

/// Symbol to codeword mapping derived from one tree.
pub type CodeTable = FxHashMap<u8, Codeword>;

/// Derive the code table by walking the tree with an explicit stack. Each
/// child push gets its own extended copy of the path, so sibling branches
/// never share state.
///
/// A root that is directly a leaf has a zero-length path; that degenerate
/// single-symbol case is assigned the one-bit codeword `0` instead.
pub fn build_code_table(root: &Node) -> CodeTable {
    let mut table = CodeTable::default();

    if let Node::Leaf { symbol, .. } = root {
        table.insert(*symbol, Codeword { bits: 0, len: 1 });
        return table;
    }

    let mut stack = vec![(root, Codeword { bits: 0, len: 0 })];
    while let Some((node, path)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                table.insert(*symbol, path);
            }
            Node::Internal { left, right, .. } => {
                stack.push((
                    right,
                    Codeword {
                        bits: path.bits << 1 | 1,
                        len: path.len + 1,
                    },
                ));
                stack.push((
                    left,
                    Codeword {
                        bits: path.bits << 1,
                        len: path.len + 1,
                    },
                ));
            }
        }
    }
    table
}

#[cfg(test)]
mod test {
    use super::{build_code_table, Codeword};
    use crate::huffman_coding::tree::build_tree;
    use crate::tools::freq_count::FreqTable;

    /// True when `a` is a prefix of `b` (or equal to it).
    fn is_prefix(a: &Codeword, b: &Codeword) -> bool {
        a.len <= b.len && (b.bits >> (b.len - a.len)) == a.bits
    }

    #[test]
    fn abracadabra_codes_test() {
        let tree = build_tree(&FreqTable::new(b"abracadabra")).unwrap();
        let table = build_code_table(&tree);
        assert_eq!(table.len(), 5);
        // The most frequent symbol gets the shortest codeword.
        assert_eq!(table[&b'a'].len, 1);
        for (&symbol, codeword) in &table {
            if symbol != b'a' {
                assert_eq!(codeword.len, 3);
            }
        }
    }

    #[test]
    fn prefix_free_test() {
        let tree = build_tree(&FreqTable::new(b"the quick brown fox jumps over the lazy dog"))
            .unwrap();
        let table = build_code_table(&tree);
        let codewords: Vec<Codeword> = table.values().copied().collect();
        for (i, a) in codewords.iter().enumerate() {
            for (j, b) in codewords.iter().enumerate() {
                if i != j {
                    assert!(!is_prefix(a, b), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn single_leaf_convention_test() {
        let tree = build_tree(&FreqTable::new(b"aaaa")).unwrap();
        let table = build_code_table(&tree);
        assert_eq!(table.len(), 1);
        assert_eq!(table[&b'a'], Codeword { bits: 0, len: 1 });
        assert_eq!(format!("{}", table[&b'a']), "0");
    }

    #[test]
    fn codeword_display_test() {
        let codeword = Codeword { bits: 0b101, len: 3 };
        assert_eq!(format!("{}", codeword), "101");
        let padded = Codeword { bits: 0b01, len: 2 };
        assert_eq!(format!("{}", padded), "01");
    }

    #[test]
    fn minimality_beats_fixed_width_test() {
        // Weighted codeword length must not exceed a 3-bit fixed code for a
        // 5-symbol alphabet (and is strictly better on a skewed input).
        let freqs = FreqTable::new(b"abracadabra");
        let tree = build_tree(&freqs).unwrap();
        let table = build_code_table(&tree);
        let weighted: u64 = table
            .iter()
            .map(|(&symbol, codeword)| freqs.count(symbol) * codeword.len as u64)
            .sum();
        assert_eq!(weighted, 23);
        assert!(weighted < 3 * freqs.total());
    }

    #[test]
    fn every_symbol_has_a_code_test() {
        let data = b"some sample data with a reasonable spread of bytes 0123456789";
        let freqs = FreqTable::new(data);
        let tree = build_tree(&freqs).unwrap();
        let table = build_code_table(&tree);
        for (symbol, _) in freqs.entries() {
            assert!(table.contains_key(&symbol), "missing code for {:#04x}", symbol);
        }
        assert_eq!(table.len(), freqs.distinct());
    }
}
