use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

struct Prefix {
    octets: [u8; 16],
    len: usize,
    id: usize,
}

fn prefix_key(p: &Prefix) -> Key<'_> {
    Key::new(&p.octets, p.len)
}

fn noop(_: &Prefix) {}

fn mask(len: usize) -> u128 {
    if len == 0 { 0 } else { !0u128 << (128 - len) }
}

proptest! {
    #[test]
    fn position_index_roundtrip(len in 1usize..=256, seed in any::<usize>()) {
        let i = seed % len;
        let pos = bit_position(len, i);
        prop_assert!(pos < len);
        prop_assert_eq!(bit_index(len, pos), i);
        prop_assert_eq!(bit_position(len, bit_index(len, pos)), pos);
    }

    #[test]
    fn get_bit_matches_u128(addr in any::<u128>(), len in 1usize..=128, seed in any::<usize>()) {
        let i = seed % len;
        let bytes = addr.to_be_bytes();
        let pos = bit_position(len, i);
        let expected = (addr >> (127 - pos)) & 1 == 1;
        prop_assert_eq!(get_bit(&bytes, len, i), expected);
    }

    #[test]
    fn insert_walk_search(entries in prop::collection::vec((any::<u128>(), 1usize..=128), 0..64)) {
        let mut trie = Trie::new(FnAttr::new(prefix_key, noop));
        // Last writer wins for each (masked bits, len).
        let mut model = BTreeMap::new();
        for (id, (addr, len)) in entries.iter().enumerate() {
            let prev = trie.insert(Prefix { octets: addr.to_be_bytes(), len: *len, id }).unwrap();
            let expected = model.insert((addr & mask(*len), *len), id);
            prop_assert_eq!(prev.map(|p| p.id), expected);
        }

        prop_assert_eq!(trie.len(), model.len());
        prop_assert_eq!(trie.walk().count(), model.len());
        let mut walked: Vec<usize> = trie.walk().map(|p| p.id).collect();
        walked.sort();
        let mut ids: Vec<usize> = model.values().copied().collect();
        ids.sort();
        prop_assert_eq!(walked, ids);

        for ((bits, len), id) in &model {
            let octets = bits.to_be_bytes();
            let found = trie.get(&Key::new(&octets, *len)).map(|p| p.id);
            prop_assert_eq!(found, Some(*id));
        }
    }

    #[test]
    fn deeper_before_shallower(addr in any::<u128>(), short in 1usize..128, extra in 1usize..=127) {
        let long = (short + extra).min(128);
        prop_assume!(long > short);
        let mut trie = Trie::new(FnAttr::new(prefix_key, noop));
        trie.insert(Prefix { octets: addr.to_be_bytes(), len: short, id: 0 }).unwrap();
        trie.insert(Prefix { octets: addr.to_be_bytes(), len: long, id: 1 }).unwrap();
        let order: Vec<usize> = trie.walk().map(|p| p.id).collect();
        prop_assert_eq!(order, vec![1, 0]);
    }
}
