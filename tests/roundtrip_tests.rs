//! tests/roundtrip_tests.rs
//! End-to-end encode/decode round-trips, in memory and on disk.

mod common;

use common::{key_from, mem_encode, TEST_KEYFILE, TEST_PASSWORD};
use renc::{begin_decode, decode_file, encode_file};
use std::fs;
use std::io::Cursor;

#[test]
fn memory_roundtrip_at_boundary_lengths() {
    let key = key_from(TEST_PASSWORD, TEST_KEYFILE);

    for len in [0usize, 1, 15, 16, 17, 1000] {
        let content: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        let container = mem_encode("data.bin", &content, &key);

        let decoder = begin_decode(Cursor::new(&container), &key).unwrap();
        assert_eq!(decoder.info().name, "data.bin", "len {len}");
        assert_eq!(decoder.info().length, len as u64, "len {len}");

        let mut restored = Vec::new();
        decoder.copy_content(&mut restored).unwrap();
        assert_eq!(restored, content, "len {len}");
    }
}

#[test]
fn hello_txt_container_shape() {
    // "hi" under name "hello.txt": metadata plaintext is 4 + 9 + 8 = 21
    // bytes -> two encrypted blocks; content is one block. Total:
    // 4 (version) + 32 (wrapped key) + 32 (metadata) + 16 (content) = 84.
    let key = key_from("pw", b"seed");
    let container = mem_encode("hello.txt", b"hi", &key);

    assert_eq!(container.len(), 84);
    assert_eq!(&container[..4], &[0, 0, 0, 0], "version field");

    let decoder = begin_decode(Cursor::new(&container), &key).unwrap();
    assert_eq!(decoder.info().name, "hello.txt");
    assert_eq!(decoder.info().length, 2);
    let mut restored = Vec::new();
    decoder.copy_content(&mut restored).unwrap();
    assert_eq!(restored, b"hi");
}

#[test]
fn file_roundtrip_recreates_name_and_content() {
    let dir = tempfile::tempdir().unwrap();
    let key = key_from(TEST_PASSWORD, TEST_KEYFILE);

    for len in [0usize, 1, 15, 16, 17, 1000] {
        let content: Vec<u8> = (0..len).map(|i| (i * 7 % 256) as u8).collect();
        let input_path = dir.path().join(format!("plain-{len}.bin"));
        let container_path = dir.path().join(format!("plain-{len}.renc"));
        fs::write(&input_path, &content).unwrap();

        encode_file(&input_path, &container_path, &key).unwrap();

        // The stored name is the input path as given; remove the original so
        // decode demonstrably recreates it.
        fs::remove_file(&input_path).unwrap();
        let restored_path = decode_file(&container_path, &key).unwrap();

        assert_eq!(restored_path, input_path, "len {len}");
        assert_eq!(fs::read(&restored_path).unwrap(), content, "len {len}");
    }
}

#[test]
fn decode_truncates_existing_target() {
    let dir = tempfile::tempdir().unwrap();
    let key = key_from(TEST_PASSWORD, TEST_KEYFILE);

    let input_path = dir.path().join("doc.txt");
    let container_path = dir.path().join("doc.renc");
    fs::write(&input_path, b"short").unwrap();
    encode_file(&input_path, &container_path, &key).unwrap();

    // Plain create-call semantics: an existing file at the stored name is
    // truncated, not appended to.
    fs::write(&input_path, b"a much longer pre-existing file body").unwrap();
    decode_file(&container_path, &key).unwrap();
    assert_eq!(fs::read(&input_path).unwrap(), b"short");
}
