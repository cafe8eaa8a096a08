//! Build script to generate embedded word lists
//!
//! Reads the English word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (input, output, const_name, doc_comment) in [
        (
            "data/english/easy.txt",
            "easy.rs",
            "EASY_WORDS",
            "English 5-letter words (easy difficulty)",
        ),
        (
            "data/english/medium.txt",
            "medium.rs",
            "MEDIUM_WORDS",
            "English 6-letter words (medium difficulty)",
        ),
        (
            "data/english/hard.txt",
            "hard.rs",
            "HARD_WORDS",
            "English 7-letter words (hard difficulty)",
        ),
    ] {
        generate_word_list(input, &Path::new(&out_dir).join(output), const_name, doc_comment);
        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
