use std::fs::File;
use std::io::{BufReader, Write};

use tempfile::TempDir;

use hush::{LexiconSource, ProfanityFilter, SharedLexicon};

#[test]
fn test_word_file_feeds_the_filter() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("user_words.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "# words added from the dashboard").unwrap();
        writeln!(file, "grommet").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  Doofus").unwrap();
    }

    let mut source = LexiconSource::builtin();
    let appended = source
        .extend_from_reader(BufReader::new(File::open(&path).unwrap()))
        .unwrap();
    assert_eq!(appended, 2);

    let filter = ProfanityFilter::new(&source);
    assert_eq!(filter.filter("you grommet"), "you g******");
    assert_eq!(filter.filter("you DOOFUS"), "you d*****");
}

#[test]
fn test_runtime_growth_is_visible_to_queries() {
    let filter = ProfanityFilter::new(&LexiconSource::builtin());
    assert!(!filter.is_foul("flibbertigibbet"));

    assert!(filter.add_word("flibbertigibbet"));
    assert!(filter.is_foul("flibbertigibbet"));
    // A close misspelling rides along: 15 chars puts it in the 0.8 band.
    assert!(filter.is_foul("flibbertigibbett"));
}

#[test]
fn test_shared_lexicon_snapshots_stay_consistent() {
    let lexicon = SharedLexicon::from_source(&LexiconSource::builtin());
    let baseline = lexicon.len();

    std::thread::scope(|scope| {
        let writer = scope.spawn(|| {
            for i in 0..500 {
                lexicon.insert(&format!("generated{i}"));
            }
        });
        for _ in 0..200 {
            lexicon.read(|trie, candidates| {
                // The candidate cache must never lag or lead the trie.
                assert_eq!(trie.len(), candidates.len());
            });
        }
        writer.join().unwrap();
    });

    assert_eq!(lexicon.len(), baseline + 500);
}

#[test]
fn test_duplicate_growth_is_idempotent() {
    let filter = ProfanityFilter::new(&LexiconSource::new());
    assert!(filter.add_word("grommet"));
    assert!(!filter.add_word("grommet"));
    assert!(!filter.add_word("GROMMET"));
    assert_eq!(filter.lexicon_len(), 1);
}
