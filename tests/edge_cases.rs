//! Edge case and error handling tests for sheaf


use harness::{TestTree, block_paths, run_sheaf};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.txt", "content");
    symlink("..", tree.join("subdir/parent")).expect("Failed to create parent symlink");

    let (_stdout, _stderr, success) = run_sheaf(tree.path(), &["concat", ".", "-o", "out.txt"]);
    assert!(success, "sheaf should not hang on parent symlink");
    assert_eq!(block_paths(&tree.read("out.txt"), "FILE PATH").len(), 1);
}

#[test]
fn test_dangling_symlink_is_skipped() {
    let tree = TestTree::new();
    tree.add_file("real.txt", "real");
    symlink("does-not-exist", tree.join("dangling.txt")).expect("Failed to create symlink");

    let (_stdout, stderr, success) =
        run_sheaf(tree.path(), &["-v", "concat", ".", "-o", "out.txt"]);
    assert!(success);
    assert!(stderr.contains("dangling.txt"), "should log the skip: {}", stderr);
    assert_eq!(
        block_paths(&tree.read("out.txt"), "FILE PATH"),
        vec!["./real.txt"]
    );
}

#[test]
fn test_symlink_to_output_is_guarded() {
    let tree = TestTree::new();
    tree.add_file("src/a.txt", "hello");
    tree.add_dir("out");
    symlink("../out/bundle.txt", tree.join("src/bundle-link.txt")).expect("symlink");

    let (_stdout, _stderr, success) =
        run_sheaf(tree.path(), &["concat", "src", "-o", "out/bundle.txt"]);
    assert!(success);
    assert_eq!(
        block_paths(&tree.read("out/bundle.txt"), "FILE PATH"),
        vec!["src/a.txt"]
    );
}

// ============================================================================
// Permission Edge Cases
// ============================================================================

/// Root ignores permission bits, so a locked file may still be readable.
fn still_readable(path: &std::path::Path) -> bool {
    fs::read(path).is_ok()
}

#[test]
fn test_unreadable_file_is_skipped() {
    let tree = TestTree::new();
    tree.add_file("ok.txt", "fine");
    let locked = tree.add_file("locked.txt", "secret");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let bypassed = still_readable(&locked);

    let (_stdout, _stderr, success) = run_sheaf(tree.path(), &["concat", ".", "-o", "out.txt"]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    assert!(success, "unreadable files must not abort the run");
    let out = tree.read("out.txt");
    assert!(out.contains("fine"));
    if !bypassed {
        assert!(!out.contains("secret"));
    }
}

#[test]
fn test_unreadable_directory_is_skipped() {
    let tree = TestTree::new();
    tree.add_file("ok.txt", "fine");
    tree.add_file("locked/hidden.txt", "hidden");
    let locked = tree.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let (_stdout, _stderr, success) = run_sheaf(tree.path(), &["concat", ".", "-o", "out.txt"]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success, "unreadable directories must not abort the run");
    assert!(tree.read("out.txt").contains("fine"));
}

// ============================================================================
// Content Edge Cases
// ============================================================================

#[test]
fn test_empty_directory_produces_empty_output() {
    let tree = TestTree::new();
    tree.add_dir("empty");

    let (stdout, _stderr, success) =
        run_sheaf(tree.path(), &["concat", "empty", "-o", "out.txt"]);
    assert!(success);
    assert!(stdout.contains("Done. 0 files"));
    assert_eq!(tree.read("out.txt"), "");
}

#[test]
fn test_empty_file_still_gets_block() {
    let tree = TestTree::new();
    tree.add_file("empty.txt", "");

    let (_stdout, _stderr, success) =
        run_sheaf(tree.path(), &["concat", "empty.txt", "-o", "out.txt"]);
    assert!(success);
    let bar = "=".repeat(80);
    assert_eq!(
        tree.read("out.txt"),
        format!("\n{bar}\nFILE PATH: empty.txt\n{bar}\n\n\n")
    );
}

#[test]
fn test_null_after_first_kilobyte_is_included() {
    let tree = TestTree::new();
    let mut content = vec![b'a'; 2048];
    content[1500] = 0;
    tree.add_bytes("late.txt", &content);

    let (_stdout, _stderr, success) =
        run_sheaf(tree.path(), &["concat", "late.txt", "-o", "out.txt"]);
    assert!(success);
    assert_eq!(block_paths(&tree.read("out.txt"), "FILE PATH"), vec!["late.txt"]);
}

#[test]
fn test_binary_with_text_tail_is_skipped() {
    let tree = TestTree::new();
    let mut content = vec![0u8; 4];
    content.extend_from_slice("plain text after the header\n".repeat(100).as_bytes());
    tree.add_bytes("image.png", &content);

    let (_stdout, _stderr, success) =
        run_sheaf(tree.path(), &["concat", ".", "-o", "out.txt"]);
    assert!(success);
    assert!(!tree.read("out.txt").contains("plain text after the header"));
}

#[test]
fn test_very_long_line() {
    let tree = TestTree::new();
    let long = "x".repeat(100_000);
    tree.add_file("long.txt", &long);

    let (_stdout, _stderr, success) =
        run_sheaf(tree.path(), &["concat", "long.txt", "-o", "out.txt"]);
    assert!(success);
    assert!(tree.read("out.txt").contains(&long));
}

#[test]
fn test_unicode_file_names() {
    let tree = TestTree::new();
    tree.add_file("docs/résumé.txt", "ünïcödé");

    let (_stdout, _stderr, success) =
        run_sheaf(tree.path(), &["concat", "docs", "-o", "out.txt"]);
    assert!(success);
    let out = tree.read("out.txt");
    assert!(out.contains("FILE PATH: docs/résumé.txt"));
    assert!(out.contains("ünïcödé"));
}
