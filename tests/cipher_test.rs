use classical_ciphers::{
    CipherAlgorithm, CipherKey, ClassicalCipher, DigraphCipher, DigraphRule, Error, GridPos,
    PolyalphabeticCipher, Result, ShiftCipher, StepKind,
};

// ----- Shift Cipher Tests -----

#[test]
fn test_shift_known_vector() -> Result<()> {
    let cipher = ShiftCipher::new();
    let key = CipherKey::from(3);

    let encrypted = cipher.encrypt("HELLO", &key)?;
    assert_eq!(encrypted.output(), "KHOOR");

    let decrypted = cipher.decrypt("KHOOR", &key)?;
    assert_eq!(decrypted.output(), "HELLO");
    Ok(())
}

#[test]
fn test_shift_text_and_numeric_keys_agree() -> Result<()> {
    let cipher = ShiftCipher::new();
    let from_text = cipher.encrypt("Veni, vidi, vici", &CipherKey::from("13"))?;
    let from_number = cipher.encrypt("Veni, vidi, vici", &CipherKey::from(13))?;
    assert_eq!(from_text, from_number);
    assert_eq!(from_text.output(), "Irav, ivqv, ivpv");
    Ok(())
}

#[test]
fn test_shift_rejects_non_integer_key() {
    let result = ShiftCipher::new().encrypt("HELLO", &CipherKey::from("abc"));
    match result {
        Err(Error::InvalidKey(msg)) => assert!(msg.contains("integer")),
        other => panic!("Expected InvalidKey, got {:?}", other),
    }
}

#[test]
fn test_shift_trace_only_has_letters() -> Result<()> {
    let result = ShiftCipher::new().encrypt("a b-c", &CipherKey::from(1))?;
    assert_eq!(result.output(), "b c-d");
    let inputs: Vec<&str> = result.steps().iter().map(|s| s.input()).collect();
    assert_eq!(inputs, vec!["a", "b", "c"]);
    Ok(())
}

// ----- Polyalphabetic Cipher Tests -----

#[test]
fn test_polyalphabetic_known_vector() -> Result<()> {
    let cipher = PolyalphabeticCipher::new();
    let key = CipherKey::from("LEMON");

    let encrypted = cipher.encrypt("ATTACKATDAWN", &key)?;
    assert_eq!(encrypted.output(), "LXFOPVEFRNHR");

    let decrypted = cipher.decrypt("LXFOPVEFRNHR", &key)?;
    assert_eq!(decrypted.output(), "ATTACKATDAWN");
    Ok(())
}

#[test]
fn test_polyalphabetic_rejects_empty_key() {
    let result = PolyalphabeticCipher::new().encrypt("ATTACK", &CipherKey::from(""));
    assert!(matches!(result, Err(Error::InvalidKey(_))));
}

#[test]
fn test_polyalphabetic_steps_record_key_letter() -> Result<()> {
    let result = PolyalphabeticCipher::new().encrypt("AT", &CipherKey::from("LEMON"))?;
    assert_eq!(
        result.steps()[1].kind(),
        &StepKind::Keyed {
            key_letter: 'E',
            shift: 4
        }
    );
    assert_eq!(result.steps()[1].to_string(), "T + E -> X");
    Ok(())
}

// ----- Digraph Cipher Tests -----

#[test]
fn test_digraph_known_vector() -> Result<()> {
    let cipher = DigraphCipher::new();
    let key = CipherKey::from("MONARCHY");

    let encrypted = cipher.encrypt("INSTRUMENTS", &key)?;
    assert_eq!(encrypted.output(), "GATLMZCLRQXA");

    let decrypted = cipher.decrypt("GATLMZCLRQXA", &key)?;
    assert_eq!(decrypted.output(), "INSTRUMENTSX");
    Ok(())
}

#[test]
fn test_digraph_rejects_odd_ciphertext() {
    let result = DigraphCipher::new().decrypt("GAT LM", &CipherKey::from("MONARCHY"));
    assert_eq!(result, Err(Error::MalformedCiphertext { letters: 5 }));
}

#[test]
fn test_digraph_rejects_empty_key() {
    let result = DigraphCipher::new().encrypt("HELLO", &CipherKey::from(""));
    assert!(matches!(result, Err(Error::InvalidKey(_))));
}

#[test]
fn test_digraph_rules_in_trace() -> Result<()> {
    let result = DigraphCipher::new().encrypt("INSTRUMENTS", &CipherKey::from("MONARCHY"))?;
    let rules: Vec<DigraphRule> = result.steps().iter().filter_map(|s| s.rule()).collect();
    assert_eq!(
        rules,
        vec![
            DigraphRule::Rectangle,
            DigraphRule::SameRow,
            DigraphRule::Rectangle,
            DigraphRule::SameColumn,
            DigraphRule::Rectangle,
            DigraphRule::SameColumn,
        ]
    );
    Ok(())
}

#[test]
fn test_digraph_coordinates_point_at_letters() -> Result<()> {
    let result =
        DigraphCipher::new().encrypt("Hide the gold", &CipherKey::from("playfair example"))?;
    let square = result.key_square().expect("digraph result carries a key square");

    for step in result.steps() {
        let coords = step.coordinates().expect("digraph steps carry coordinates");
        let input: Vec<char> = step.input().chars().collect();
        let output: Vec<char> = step.output().chars().collect();
        assert_eq!(square.letter_at(coords[0]), Some(input[0]));
        assert_eq!(square.letter_at(coords[1]), Some(input[1]));
        assert_eq!(square.letter_at(coords[2]), Some(output[0]));
        assert_eq!(square.letter_at(coords[3]), Some(output[1]));
    }
    Ok(())
}

#[test]
fn test_digraph_double_filler_pair() -> Result<()> {
    // "XX" cannot be split by the filler; both letters share a cell
    let result = DigraphCipher::new().encrypt("XX", &CipherKey::from("MONARCHY"))?;
    assert_eq!(result.steps().len(), 2);
    assert_eq!(result.steps()[0].input(), "XX");
    assert_eq!(result.steps()[0].rule(), Some(DigraphRule::SameRow));
    assert_eq!(result.output(), "ZZZZ");
    assert_eq!(
        result.steps()[0].coordinates().map(|c| c[2]),
        Some(GridPos::new(4, 4))
    );
    Ok(())
}

// ----- Selection Tests -----

#[test]
fn test_every_algorithm_by_identifier() -> Result<()> {
    let cases = [
        ("shift", "3", "HELLO", "KHOOR"),
        ("polyalphabetic", "LEMON", "ATTACKATDAWN", "LXFOPVEFRNHR"),
        ("digraph", "MONARCHY", "INSTRUMENTS", "GATLMZCLRQXA"),
    ];
    for (name, key, plain, cipher) in cases {
        let algorithm: CipherAlgorithm = name.parse()?;
        assert_eq!(algorithm.encrypt(plain, key)?.output(), cipher, "{}", name);
    }
    Ok(())
}

#[test]
fn test_errors_are_deterministic() {
    let first = ShiftCipher::new().encrypt("HELLO", &CipherKey::from("x1"));
    let second = ShiftCipher::new().encrypt("HELLO", &CipherKey::from("x1"));
    assert_eq!(first, second);
}
