//! End-to-end scenarios: policy → generator → passwords.

use passgen_core::charset::{LOWERCASE, SYMBOLS};
use passgen_core::{build, Generator, PasswordError, Policy, DEFAULT_PASSWORD_LENGTH};

/// Lowercase only, length 24, duplicates allowed → 24 chars of a-z.
#[test]
fn lowercase_only_default_length() {
    let policy = Policy {
        lowercase: true,
        length: 24,
        ..Policy::empty()
    };
    let pw = Generator::new(&policy).unwrap().generate().unwrap();
    assert_eq!(pw.len(), 24);
    assert!(
        pw.expose().chars().all(|c| c.is_ascii_lowercase()),
        "not all lowercase: {}",
        pw.expose()
    );
}

/// Lowercase with exclusion → 22-character set without i, j, l, o.
#[test]
fn lowercase_excluding_similar_set() {
    let policy = Policy {
        lowercase: true,
        exclude_similar: true,
        ..Policy::empty()
    };
    let set = build(&policy).unwrap();
    assert_eq!(set.len(), 22);
    let expected: String = LOWERCASE.chars().filter(|c| !"ijlo".contains(*c)).collect();
    assert_eq!(set.to_string(), expected);

    let generator = Generator::new(&policy).unwrap();
    for _ in 0..50 {
        let pw = generator.generate().unwrap();
        assert!(!pw.expose().chars().any(|c| "ijlo".contains(c)));
    }
}

/// Every flag off and no override → EmptyPolicy from both entry points.
#[test]
fn empty_policy_fails() {
    assert!(matches!(
        build(&Policy::empty()),
        Err(PasswordError::EmptyPolicy)
    ));
    assert!(matches!(
        Generator::new(&Policy::empty()),
        Err(PasswordError::EmptyPolicy)
    ));
}

/// Five characters, length 10, no duplicates → each character exactly once.
#[test]
fn unique_mode_uses_whole_small_set() {
    let policy = Policy {
        character_set: Some("pqrst".into()),
        allow_duplicates: false,
        length: 10,
        ..Policy::empty()
    };
    let pw = Generator::new(&policy).unwrap().generate().unwrap();
    let mut chars: Vec<char> = pw.expose().chars().collect();
    chars.sort_unstable();
    assert_eq!(chars, vec!['p', 'q', 'r', 's', 't']);
}

/// A policy decoded from a partial JSON document behaves like the default
/// policy with only the named fields changed.
#[test]
fn policy_from_json_document() {
    let policy = Policy::from_json(
        r#"{"uppercase": false, "digits": false, "extendedSymbols": false, "length": 40}"#,
    )
    .unwrap();
    let generator = Generator::new(&policy).unwrap();
    assert_eq!(generator.length(), 40);

    let pw = generator.generate().unwrap();
    assert_eq!(pw.len(), 40);
    assert!(pw
        .expose()
        .chars()
        .all(|c| c.is_ascii_lowercase() || SYMBOLS.contains(c)));
}

/// Default policy: all classes, look-alikes removed, 24 characters.
#[test]
fn default_policy_output() {
    let generator = Generator::with_default_policy().unwrap();
    assert_eq!(generator.length(), DEFAULT_PASSWORD_LENGTH);
    for c in ['i', 'j', 'l', 'o', 'I', 'J', 'L', 'O', '0', '1'] {
        assert!(!generator.character_set().contains(c), "look-alike {c} kept");
    }
    let passwords = generator.generate_many(20).unwrap();
    assert_eq!(passwords.len(), 20);
    for pw in &passwords {
        assert_eq!(pw.len(), DEFAULT_PASSWORD_LENGTH);
        assert!(pw
            .expose()
            .chars()
            .all(|c| generator.character_set().contains(c)));
    }
}

/// Independent calls do not repeat each other.
#[test]
fn passwords_are_unique() {
    let generator = Generator::with_default_policy().unwrap();
    let passwords: std::collections::HashSet<String> = (0..100)
        .map(|_| generator.generate().unwrap().expose().to_owned())
        .collect();
    assert_eq!(passwords.len(), 100, "generated duplicate passwords");
}

/// A generator can be shared across threads.
#[test]
fn concurrent_generation() {
    let generator = std::sync::Arc::new(Generator::with_default_policy().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = std::sync::Arc::clone(&generator);
            std::thread::spawn(move || generator.generate_many_with_length(25, 16).unwrap())
        })
        .collect();
    for handle in handles {
        let passwords = handle.join().unwrap();
        assert_eq!(passwords.len(), 25);
        assert!(passwords.iter().all(|p| p.len() == 16));
    }
}
