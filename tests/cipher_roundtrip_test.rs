/// Integration tests for the cipher strategies through the public API
///
/// Tests the following scenarios:
/// 1. Round trips for every strategy, including mode-wrapped variants
/// 2. The documented concrete vectors (ROT13, hex, AES)
/// 3. Boundary validation at construction time
/// 4. Polymorphic use through the factory and trait objects
use textcipher::cipher::{CipherSpec, mode_code, new_cipher};
use textcipher::{AesCipher, CaesarCipher, Cipher, CipherConfig, CipherError, Mode, VigenereCipher};

/// Helper: round-trips `text` through `cipher` and asserts it survives.
fn assert_round_trip(cipher: &dyn Cipher, text: &str) {
    let ciphertext = cipher.encrypt(text).expect("encrypt failed");
    let recovered = cipher.decrypt(&ciphertext).expect("decrypt failed");
    assert_eq!(recovered, text);
}

#[test]
fn caesar_concrete_vectors() {
    let cipher = CaesarCipher::with_rotations(13);
    assert_eq!(cipher.encrypt("Hello, World!").unwrap(), "Uryyb, Jbeyq!");
    assert_eq!(cipher.decrypt("Uryyb, Jbeyq!").unwrap(), "Hello, World!");
}

#[test]
fn caesar_round_trips_across_rotations() {
    for rotations in [-100, -27, -1, 0, 1, 13, 25, 26, 51, 100] {
        let cipher = CaesarCipher::with_rotations(rotations);
        assert_round_trip(&cipher, "The Quick Brown Fox Jumps Over 13 Lazy Dogs!");
    }
}

#[test]
fn vigenere_round_trips_and_preserves_punctuation() {
    let cipher = VigenereCipher::with_key("key").unwrap();
    assert_round_trip(&cipher, "Hello");

    let ciphertext = cipher.encrypt("Hello, World!").unwrap();
    // Non-alphabetic characters appear unchanged at the same positions.
    let chars: Vec<char> = ciphertext.chars().collect();
    assert_eq!(chars[5], ',');
    assert_eq!(chars[6], ' ');
    assert_eq!(chars[12], '!');
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "Hello, World!");
}

#[test]
fn aes_round_trips_for_all_key_sizes() {
    for bits in [128, 192, 256] {
        let key = AesCipher::generate_key(bits).unwrap();
        let cipher = AesCipher::with_key(&key).unwrap();
        assert_round_trip(&cipher, "arbitrary text, spanning more than one AES block....");
    }
}

#[test]
fn aes_ciphertext_is_base64_and_distinct() {
    let cipher = AesCipher::with_key(&AesCipher::generate_key(128).unwrap()).unwrap();
    let ciphertext = cipher.encrypt("secret").unwrap();
    assert!(!ciphertext.is_empty());
    assert_ne!(ciphertext, "secret");
    assert!(
        ciphertext
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=')
    );
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "secret");
}

#[test]
fn hex_input_mode_decodes_before_ciphering() {
    let config = CipherConfig::from_codes(2, 0).unwrap();
    assert_eq!(config.decode_input("68656c6c6f").unwrap(), "hello");

    // A rotation of zero makes the cipher a pure mode transcoder.
    let cipher = CaesarCipher::new(config, 0);
    assert_eq!(cipher.encrypt("68656c6c6f").unwrap(), "hello");
}

#[test]
fn invalid_mode_rejected_at_construction() {
    assert!(CaesarCipher::from_codes(5, 0, 13).is_err());
    assert!(VigenereCipher::from_codes(0, 5, "key").is_err());
    assert!(AesCipher::from_codes(5, 0, &[0u8; 16], &[0u8; 16]).is_err());

    let err = CipherConfig::from_codes(5, 0).unwrap_err();
    match err {
        CipherError::Argument(msg) => {
            assert!(msg.contains("0 = plaintext"));
            assert!(msg.contains("1 = base64"));
            assert!(msg.contains("2 = hex"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn mode_name_mapping_round_trip() {
    for (name, code) in [("plaintext", 0), ("base64", 1), ("hex", 2)] {
        assert_eq!(mode_code(name), code);
        assert_eq!(Mode::from_code(code).unwrap().name(), name);
    }
    assert_eq!(mode_code("vigenere"), -1);
    assert!(CipherConfig::from_codes(-1, 0).is_err());
}

#[test]
fn strategies_are_interchangeable_behind_the_trait() {
    let key = AesCipher::generate_key(256).unwrap();
    let iv = AesCipher::generate_iv();
    let ciphers: Vec<Box<dyn Cipher>> = vec![
        Box::new(CaesarCipher::with_rotations(5)),
        Box::new(VigenereCipher::with_key("Sphinx").unwrap()),
        Box::new(AesCipher::new(CipherConfig::default(), &key, &iv).unwrap()),
    ];
    for cipher in &ciphers {
        assert_round_trip(cipher.as_ref(), "Pack my box with five dozen liquor jugs.");
    }
}

#[test]
fn factory_builds_from_deserialized_spec() {
    let spec: CipherSpec = toml::from_str(
        r#"
        [caesar]
        rotations = 13
        "#,
    )
    .unwrap();
    let cipher = new_cipher(&spec).unwrap();
    assert_eq!(cipher.encrypt("Hello, World!").unwrap(), "Uryyb, Jbeyq!");
}

#[test]
fn shared_instances_are_safe_across_threads() {
    let cipher = std::sync::Arc::new(VigenereCipher::with_key("thread").unwrap());
    let mut handles = Vec::new();
    for i in 0..4 {
        let cipher = cipher.clone();
        handles.push(std::thread::spawn(move || {
            let text = format!("message number {}", i);
            let ct = cipher.encrypt(&text).unwrap();
            assert_eq!(cipher.decrypt(&ct).unwrap(), text);
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}
