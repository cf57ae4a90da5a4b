#![allow(dead_code)]
extern crate prefquery;

use prefquery::generate_accessor_predicate;

use std::fs::File;
use std::io::{BufRead, BufReader};

/// test to make sure each chain in the input file produces the matching output line
pub fn test_from_files(input_path: &str, output_path: &str) {
    let inputfile = File::open(input_path).unwrap();
    let outputfile = File::open(output_path).unwrap();
    test_lines(BufReader::new(inputfile), BufReader::new(outputfile));
}

pub fn test_lines(input: impl BufRead, output: impl BufRead) {
    let inputs: Vec<String> = input.lines().map(Result::unwrap).collect();
    let outputs: Vec<String> = output.lines().map(Result::unwrap).collect();
    assert_eq!(
        inputs.len(),
        outputs.len(),
        "input and expected output have different line counts"
    );
    for (line_in, line_out) in inputs.into_iter().zip(outputs) {
        match generate_accessor_predicate(line_in.trim()) {
            Ok(predicate) => assert_eq!(predicate, line_out),
            Err(e) => assert_eq!(e.to_string(), line_out),
        }
    }
}

pub fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}
