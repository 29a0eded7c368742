//! Save/load round-trips of the index tables.

use esagram::sequence::word;
use esagram::{Error, SuffixArray};
use tempfile::tempdir;

#[test]
fn test_saved_and_loaded_index_agree_on_queries() {
    let tokens =
        word::read_words_with_sentinel("the cat sat on the mat the cat".as_bytes()).unwrap();
    let built = SuffixArray::build(&tokens).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("corpus.esa");
    built.save(&path).unwrap();
    let loaded = SuffixArray::load(&path, &tokens).unwrap();

    for query in [
        "the",
        "cat",
        "the cat",
        "sat on",
        "mat the cat",
        "missing",
        "the cat sat on the mat the cat",
        "",
    ] {
        let pattern = word::tokenize(query);
        assert_eq!(
            built.find_count(&pattern),
            loaded.find_count(&pattern),
            "count disagrees for {:?}",
            query
        );
        let mut built_positions = built.find_all_positions(&pattern);
        let mut loaded_positions = loaded.find_all_positions(&pattern);
        built_positions.sort_unstable();
        loaded_positions.sort_unstable();
        assert_eq!(built_positions, loaded_positions, "positions disagree for {:?}", query);
    }
}

#[test]
fn test_loaded_index_answers_skipgrams() {
    let tokens = word::read_words_with_sentinel("a b c d e a b c d e".as_bytes()).unwrap();
    let built = SuffixArray::build(&tokens).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("skip.esa");
    built.save(&path).unwrap();
    let loaded = SuffixArray::load(&path, &tokens).unwrap();

    let parts = vec![word::tokenize("a"), word::tokenize("c")];
    assert_eq!(loaded.find_all_positions_skip(&parts, 1, 3), vec![0, 5]);
}

#[test]
fn test_save_format_is_stable_across_runs() {
    let tokens = word::read_words_with_sentinel("b a n a n a".as_bytes()).unwrap();
    let index = SuffixArray::build(&tokens).unwrap();

    let dir = tempdir().unwrap();
    let first = dir.path().join("first.esa");
    let second = dir.path().join("second.esa");
    index.save(&first).unwrap();
    SuffixArray::build(&tokens).unwrap().save(&second).unwrap();

    let first = std::fs::read_to_string(&first).unwrap();
    let second = std::fs::read_to_string(&second).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), tokens.len());
}

#[test]
fn test_load_rejects_malformed_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.esa");
    std::fs::write(&path, "0\t1\tx\t-\t-\t-\t\n").unwrap();

    let tokens = word::read_words_with_sentinel("a b".as_bytes()).unwrap();
    assert!(matches!(
        SuffixArray::load(&path, &tokens),
        Err(Error::CorruptState { line: 1, .. })
    ));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.esa");
    let tokens = word::read_words_with_sentinel("a b".as_bytes()).unwrap();
    assert!(matches!(
        SuffixArray::load(&path, &tokens),
        Err(Error::Io(_))
    ));
}
