#[cfg(test)]
mod tests {
    use zhoconv::dictionary_lib::{DictEntry, DictionaryMaxlength, UnionKey};

    /// Fixed-order view over the 18 tables, mirroring the snapshot order.
    fn all_dicts(d: &DictionaryMaxlength) -> [&DictEntry; 18] {
        [
            &d.st_characters,
            &d.st_phrases,
            &d.st_punctuations,
            &d.ts_characters,
            &d.ts_phrases,
            &d.ts_punctuations,
            &d.tw_phrases,
            &d.tw_phrases_rev,
            &d.tw_variants,
            &d.tw_variants_rev,
            &d.tw_variants_rev_phrases,
            &d.hk_variants,
            &d.hk_variants_rev,
            &d.hk_variants_rev_phrases,
            &d.jps_characters,
            &d.jps_phrases,
            &d.jp_variants,
            &d.jp_variants_rev,
        ]
    }

    #[test]
    fn embedded_snapshot_populates_every_slot() {
        let d = DictionaryMaxlength::new().expect("embedded snapshot");
        for (i, entry) in all_dicts(&d).iter().enumerate() {
            assert!(!entry.is_empty(), "slot {i} is empty");
        }
        assert!(d.st_characters.len() > 300);
        assert!(d.st_phrases.max_key_len >= 3);
    }

    #[test]
    fn length_bounds_are_exact_for_every_slot() {
        let d = DictionaryMaxlength::new().expect("embedded snapshot");
        for (i, entry) in all_dicts(&d).iter().enumerate() {
            if entry.is_empty() {
                continue;
            }
            let min = entry.dict.keys().map(|k| k.len()).min().unwrap();
            let max = entry.dict.keys().map(|k| k.len()).max().unwrap();
            assert_eq!(entry.min_key_len, min, "slot {i} min");
            assert_eq!(entry.max_key_len, max, "slot {i} max");
            assert!(entry.min_key_len <= entry.max_key_len, "slot {i} bounds");
        }
    }

    #[test]
    fn union_bits_are_backed_by_keys() {
        let d = DictionaryMaxlength::new().expect("embedded snapshot");
        let union = d.union_for(UnionKey::S2t);
        let group = d.dicts_for(UnionKey::S2t);

        let mut checked = 0usize;
        for (cp, &mask) in union.bmp_mask.iter().enumerate() {
            if mask == 0 {
                continue;
            }
            for len in 1..64usize {
                if mask & (1 << len) == 0 {
                    continue;
                }
                let backed = group.iter().any(|g| {
                    g.dict
                        .keys()
                        .any(|k| k.len() == len && k.first() == Some(&(cp as u16)))
                });
                assert!(backed, "U+{cp:04X} len {len} has no backing key");
                checked += 1;
            }
        }
        assert!(checked > 300, "expected to verify many starters");
        assert_eq!(
            union.max_cap,
            group.iter().map(|g| g.max_key_len).max().unwrap()
        );
    }

    #[test]
    fn text_dicts_round_trip() {
        let src = DictionaryMaxlength::new().expect("embedded snapshot");
        let dir = tempfile::tempdir().unwrap();
        src.to_dicts(dir.path()).unwrap();

        // All 18 files must exist, e.g. the ST character table.
        assert!(dir.path().join("STCharacters.txt").exists());
        assert!(dir.path().join("JPVariantsRev.txt").exists());

        let loaded = DictionaryMaxlength::from_dicts_in(dir.path()).unwrap();
        assert_eq!(src, loaded);
    }

    #[test]
    fn text_loader_tolerates_junk_lines() {
        let dir = tempfile::tempdir().unwrap();
        let src = DictionaryMaxlength::new().expect("embedded snapshot");
        src.to_dicts(dir.path()).unwrap();

        // Prepend comments, blanks and malformed lines to one file.
        let path = dir.path().join("STCharacters.txt");
        let original = std::fs::read_to_string(&path).unwrap();
        let polluted = format!(
            "\u{FEFF}# comment line\n// another comment\n\nmalformed without tab\n{original}"
        );
        std::fs::write(&path, polluted).unwrap();

        let loaded = DictionaryMaxlength::from_dicts_in(dir.path()).unwrap();
        assert_eq!(src, loaded);
    }

    #[test]
    fn union_cache_is_shared_and_resettable() {
        let d = DictionaryMaxlength::new().expect("embedded snapshot");
        let a = d.union_for(UnionKey::T2s);
        let b = d.union_for(UnionKey::T2s);
        assert!(std::sync::Arc::ptr_eq(&a, &b));

        d.clear_unions();
        let c = d.union_for(UnionKey::T2s);
        assert!(!std::sync::Arc::ptr_eq(&a, &c));
        // old generation stays usable
        assert!(a.starts_with('漢' as u32));
        assert!(c.starts_with('漢' as u32));
    }
}
