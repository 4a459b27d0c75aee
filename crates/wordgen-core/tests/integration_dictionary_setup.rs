//! Integration test: local HTTP server serving a crafted dictionary archive,
//! full setup into a temp cache, pool loading, and name generation.

mod common;

use flate2::write::GzEncoder;
use flate2::Compression;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;
use wordgen_core::namegen;
use wordgen_core::setup;
use wordgen_core::words::WordPool;

const NOUN_EXC: &[u8] = b"aardwolves aardwolf\ndogs dog\ncats cat\nbicentennials bicentennial\n";
const VERB_EXC: &[u8] = b"ran run\nate eat\n";

/// Builds a gzip-compressed tarball shaped like the WordNet dictionary:
/// a `dict/` directory with `noun.exc` and `verb.exc`.
fn dictionary_archive() -> Vec<u8> {
    let enc = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(enc);

    let mut dir = tar::Header::new_gnu();
    dir.set_entry_type(tar::EntryType::Directory);
    dir.set_path("dict/").unwrap();
    dir.set_size(0);
    dir.set_mode(0o755);
    dir.set_cksum();
    builder.append(&dir, std::io::empty()).unwrap();

    for (name, content) in [("dict/noun.exc", NOUN_EXC), ("dict/verb.exc", VERB_EXC)] {
        let mut h = tar::Header::new_gnu();
        h.set_entry_type(tar::EntryType::Regular);
        h.set_size(content.len() as u64);
        h.set_mode(0o644);
        h.set_cksum();
        builder.append_data(&mut h, name, content).unwrap();
    }

    builder.into_inner().unwrap().finish().unwrap()
}

#[test]
fn setup_load_and_generate_end_to_end() {
    let server = common::http_server::start(dictionary_archive());
    let url = server.url_for("wn3.1.dict.tar.gz");
    let cache = tempdir().unwrap();

    let dict = setup::ensure_dictionary_at(&url, cache.path()).expect("setup");

    // Archive cached under the URL basename; exception lists extracted.
    assert!(cache.path().join("wn3.1.dict.tar.gz").exists());
    assert_eq!(dict.noun_path, cache.path().join("dict/noun.exc"));
    assert_eq!(dict.verb_path, cache.path().join("dict/verb.exc"));
    assert_eq!(std::fs::read(&dict.noun_path).unwrap(), NOUN_EXC);
    assert_eq!(std::fs::read(&dict.verb_path).unwrap(), VERB_EXC);

    let nouns = WordPool::load(&dict.noun_path);
    let verbs = WordPool::load(&dict.verb_path);
    // "aardwolves", "bicentennials", "bicentennial" are over the length limit.
    assert_eq!(nouns.words(), ["aardwolf", "dogs", "dog", "cats", "cat"]);
    assert_eq!(verbs.words(), ["ran", "run", "ate", "eat"]);

    let names: Vec<String> = namegen::generate_with_rng(10, nouns, verbs, StdRng::seed_from_u64(42))
        .expect("non-empty pools")
        .collect();
    assert_eq!(names.len(), 10);
    for name in &names {
        let number: String = name.chars().skip_while(|c| !c.is_ascii_digit()).collect();
        let n: u16 = number.parse().expect("trailing number");
        assert!(n < 256);
    }
}

#[test]
fn warm_cache_performs_no_network_access() {
    let server = common::http_server::start(dictionary_archive());
    let url = server.url_for("wn3.1.dict.tar.gz");
    let cache = tempdir().unwrap();

    setup::ensure_dictionary_at(&url, cache.path()).expect("first setup");
    let hits_after_first = server.hits();
    assert!(hits_after_first >= 1);

    setup::ensure_dictionary_at(&url, cache.path()).expect("second setup");
    assert_eq!(server.hits(), hits_after_first, "second setup must not hit the network");
}

#[test]
fn missing_extracted_tree_is_rebuilt_from_the_cached_archive() {
    let server = common::http_server::start(dictionary_archive());
    let url = server.url_for("wn3.1.dict.tar.gz");
    let cache = tempdir().unwrap();

    let dict = setup::ensure_dictionary_at(&url, cache.path()).expect("first setup");
    std::fs::remove_dir_all(cache.path().join("dict")).unwrap();
    let hits = server.hits();

    let dict2 = setup::ensure_dictionary_at(&url, cache.path()).expect("re-setup");
    assert_eq!(server.hits(), hits, "re-extraction must use the cached archive");
    assert_eq!(dict2.noun_path, dict.noun_path);
    assert!(dict2.noun_path.exists());
    assert!(dict2.verb_path.exists());
}
