#![no_main]

use arbitrary::Arbitrary;
use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use tessera_rlp::{Error, Output};

#[derive(Arbitrary, Debug, Clone)]
enum Tree {
    Value(Vec<u8>),
    List(Vec<Tree>),
}

#[derive(Arbitrary, Debug)]
enum Op {
    Element(Vec<u8>),
    Raw(Tree),
    StartList,
    EndList,
}

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Tree(Tree),
    Ops(Vec<Op>),
}

/// Prefixes `payload` with a header built from the given short and long bases.
fn prefixed(payload: &[u8], short: u8, long: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 9);
    if payload.len() < 56 {
        out.push(short + payload.len() as u8);
    } else {
        let len = (payload.len() as u64).to_be_bytes();
        let skip = len.iter().take_while(|b| **b == 0).count();
        out.push(long + (len.len() - skip) as u8);
        out.extend_from_slice(&len[skip..]);
    }
    out.extend_from_slice(payload);
    out
}

/// Encodes `tree` recursively, without the builder.
fn naive_encode(tree: &Tree) -> Vec<u8> {
    match tree {
        Tree::Value(value) if value.len() == 1 && value[0] < 0x80 => value.clone(),
        Tree::Value(value) => prefixed(value, 0x80, 0xB7),
        Tree::List(children) => {
            let payload: Vec<u8> = children.iter().flat_map(naive_encode).collect();
            prefixed(&payload, 0xC0, 0xF7)
        }
    }
}

/// Describes `tree` to the builder.
fn write_tree(tree: &Tree, output: &mut Output) -> Result<(), Error> {
    match tree {
        Tree::Value(value) => output.write_element(Bytes::copy_from_slice(value)),
        Tree::List(children) => output.write_list(children, write_tree),
    }
}

fn fuzz_tree(tree: Tree) {
    let expected = naive_encode(&tree);
    let mut output = Output::new();
    write_tree(&tree, &mut output).expect("failed to write tree");
    assert_eq!(output.encoded_size().unwrap(), expected.len());
    assert_eq!(output.encode().unwrap().as_ref(), &expected[..]);
}

fn fuzz_ops(ops: Vec<Op>) {
    // Track the expected state alongside the builder
    let mut output = Output::new();
    let mut depth = 0usize;
    let mut written = false;
    for op in ops {
        let terminated = depth == 0 && written;
        match op {
            Op::Element(value) => {
                let result = output.write_element(value);
                assert_eq!(result.is_err(), terminated);
                written |= result.is_ok();
            }
            Op::Raw(tree) => {
                let result = output.write_raw(naive_encode(&tree));
                assert_eq!(result.is_err(), terminated);
                written |= result.is_ok();
            }
            Op::StartList => {
                let result = output.start_list();
                assert_eq!(result.is_err(), terminated);
                if result.is_ok() {
                    depth += 1;
                    written = true;
                }
            }
            Op::EndList => {
                let result = output.end_list();
                if depth == 0 {
                    assert_eq!(result, Err(Error::UnmatchedEndList));
                } else {
                    assert!(result.is_ok());
                    depth -= 1;
                }
            }
        }
        assert_eq!(output.depth(), depth);
    }

    if depth > 0 {
        assert_eq!(output.encoded_size(), Err(Error::UnbalancedStructure));
        return;
    }
    let size = output.encoded_size().unwrap();
    let encoded = output.encode().unwrap();
    assert_eq!(encoded.len(), size);
    let mut short = vec![0; size.saturating_sub(1)];
    if size > 0 {
        assert!(matches!(
            output.write_encoded(&mut short),
            Err(Error::SizeMismatch { .. })
        ));
    }
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Tree(tree) => fuzz_tree(tree),
        FuzzInput::Ops(ops) => fuzz_ops(ops),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
