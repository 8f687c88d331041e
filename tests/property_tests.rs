use proptest::prelude::*;
use std::collections::HashMap;
use wordseal::clock::ManualClock;
use wordseal::engine::{GameStatus, PuzzleEngine};
use wordseal::leaderboard::{LeaderboardStore, MemoryMedium};

mod common;
use common::{pair_catalog, record, t0};

// (word, cell, letter or blank) against the pair catalog: dog = 3 cells, crowd = 12.
prop_compose! {
    fn arb_write()(
        is_dog in any::<bool>(),
        raw_idx in 0usize..12,
        letter in proptest::option::of(proptest::char::range('a', 'z'))
    ) -> (&'static str, usize, String) {
        let (word, len) = if is_dog { ("dog", 3) } else { ("crowd", 12) };
        (word, raw_idx % len, letter.map(|c| c.to_string()).unwrap_or_default())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_cells_reflect_last_write(writes in proptest::collection::vec(arb_write(), 0..60)) {
        let catalog = pair_catalog();
        let clock = ManualClock::new(t0());
        let engine = PuzzleEngine::new(&catalog, &clock);
        let mut state = engine.start("Prop").unwrap();

        let mut last: HashMap<(&str, usize), Option<char>> = HashMap::new();
        for (word, idx, input) in &writes {
            engine.set_cell(&mut state, word, *idx, input).unwrap();
            last.insert((*word, *idx), input.chars().next().map(|c| c.to_ascii_uppercase()));
        }

        for (word, len) in [("dog", 3usize), ("crowd", 12)] {
            let cells = state.cells(word).unwrap();
            prop_assert_eq!(cells.len(), len);
            for (i, cell) in cells.iter().enumerate() {
                let expected = last.get(&(word, i)).copied().flatten();
                prop_assert_eq!(*cell, expected);
            }
        }
        prop_assert_eq!(state.mistake_count(), 0);
        prop_assert_eq!(state.status(), GameStatus::Playing);
    }

    #[test]
    fn test_secret_phrase_is_stable(writes in proptest::collection::vec(arb_write(), 0..40)) {
        let catalog = pair_catalog();
        let clock = ManualClock::new(t0());
        let engine = PuzzleEngine::new(&catalog, &clock);
        let mut state = engine.start("Prop").unwrap();
        for (word, idx, input) in &writes {
            engine.set_cell(&mut state, word, *idx, input).unwrap();
        }

        let first = engine.derive_secret_phrase(&state);
        prop_assert_eq!(first.len(), catalog.secret_length());
        prop_assert_eq!(&engine.derive_secret_phrase(&state), &first);

        // Rewriting a cell with its own value changes nothing.
        if let Some((word, idx, _)) = writes.last() {
            let current: String = state.cells(word).unwrap()[*idx]
                .map(|c| c.to_string())
                .unwrap_or_default();
            engine.set_cell(&mut state, word, *idx, &current).unwrap();
            prop_assert_eq!(&engine.derive_secret_phrase(&state), &first);
        }

        prop_assert_eq!(first[1], state.cells("dog").unwrap()[2]);
        prop_assert_eq!(first[0], state.cells("crowd").unwrap()[0]);
    }

    #[test]
    fn test_ranking_is_stable_sort(times in proptest::collection::vec(0u64..20, 0..30)) {
        let store = LeaderboardStore::new(MemoryMedium::new());
        for (i, t) in times.iter().enumerate() {
            store.insert(record(&format!("p{}", i), *t, 0)).unwrap();
        }

        let ranked = store.get_ranked();
        prop_assert_eq!(ranked.len(), times.len());

        let mut expected: Vec<(u64, usize)> = times.iter().copied().zip(0..).collect();
        expected.sort_by_key(|(t, _)| *t);
        let expected_names: Vec<String> = expected.iter().map(|(_, i)| format!("p{}", i)).collect();
        let names: Vec<String> = ranked.into_iter().map(|r| r.name).collect();
        prop_assert_eq!(names, expected_names);
    }
}
