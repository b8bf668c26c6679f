//! Command-line argument handling for bin2ea.

use anyhow::{anyhow, Result};

use b2ea_core::{Endianness, SizePolicy, UnitWidth};

use crate::document::{DocumentOptions, Label};

/// Where the finished document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(String),
}

/// Everything one invocation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: String,
    pub sink: OutputSink,
    pub width: UnitWidth,
    pub endianness: Endianness,
    pub policy: SizePolicy,
    pub document: DocumentOptions,
}

/// Outcome of argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(RunConfig),
    /// `-h`/`-help` was given; the summary has already been printed.
    Help,
}

pub fn print_usage() {
    println!(
        "Usage: bin2ea <input> [output/-to-stdout] [-byte/-short/-word] \
         [-define <name>/-label <name>] [-before <text>] [-after <text>] \
         [-no-newline] [-big-endian] [-exact-size]"
    );
}

fn print_help() {
    println!("bin2ea - convert a binary file into assembler hex data statements");
    print_usage();
    println!("  <input>            binary file to convert");
    println!("  <output>           text file to write (required without -to-stdout)");
    println!("  -byte/-short/-word group 1, 2 or 4 bytes per emitted literal (default -byte)");
    println!("  -to-stdout         write to standard output instead of a file");
    println!("  -define <name>     wrap the code as #define <name> \"...\"");
    println!("  -label <name>      prefix the code with <name>: on its own line");
    println!("  -before <text>     insert <text>; before the code");
    println!("  -after <text>      append ; <text> after the code");
    println!("  -no-newline        do not end the output with a newline");
    println!("  -big-endian        pack multi-byte units big-endian (default little)");
    println!("  -exact-size        fail when the input length is not a multiple of the unit");
    println!("  -h, -help          display this help and exit");
}

/// The value of an option like `-before`; the next argument must exist and
/// must not itself look like an option.
fn take_value(args: &[String], i: &mut usize, option: &str) -> Result<String> {
    *i += 1;
    match args.get(*i) {
        None => Err(anyhow!("option '{option}' expects a value")),
        Some(value) if value.starts_with('-') => Err(anyhow!(
            "option '{option}' expects a literal value, got '{value}'"
        )),
        Some(value) => Ok(value.clone()),
    }
}

pub fn parse_args(args: &[String]) -> Result<Invocation> {
    let mut width = UnitWidth::default();
    let mut endianness = Endianness::default();
    let mut policy = SizePolicy::default();
    let mut to_stdout = false;
    let mut document = DocumentOptions::default();
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-byte" => width = UnitWidth::Byte,
            "-short" => width = UnitWidth::Short,
            "-word" => width = UnitWidth::Word,
            "-to-stdout" | "--to-stdout" => to_stdout = true,
            "-no-newline" => document.newline = false,
            "-big-endian" => endianness = Endianness::Big,
            "-exact-size" => policy = SizePolicy::Exact,
            "-before" => document.before = Some(take_value(args, &mut i, "-before")?),
            "-after" => document.after = Some(take_value(args, &mut i, "-after")?),
            // The last of -define/-label wins.
            "-define" => document.label = Some(Label::Define(take_value(args, &mut i, "-define")?)),
            "-label" => document.label = Some(Label::Plain(take_value(args, &mut i, "-label")?)),
            "-h" | "-help" | "--help" => {
                print_help();
                return Ok(Invocation::Help);
            }
            arg if !arg.starts_with('-') => {
                // First positional is the input, second the output; extras
                // are ignored.
                if input.is_none() {
                    input = Some(arg.to_string());
                } else if output.is_none() {
                    output = Some(arg.to_string());
                }
            }
            other => return Err(anyhow!("unrecognized option '{other}'")),
        }
        i += 1;
    }

    let input = input.ok_or_else(|| anyhow!("no input file given"))?;

    let sink = if to_stdout {
        OutputSink::Stdout
    } else {
        match output {
            Some(path) => OutputSink::File(path),
            None => {
                return Err(anyhow!(
                    "no output file given (use -to-stdout to write to standard output)"
                ))
            }
        }
    };

    Ok(Invocation::Run(RunConfig {
        input,
        sink,
        width,
        endianness,
        policy,
        document,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn parse(list: &[&str]) -> Result<Invocation> {
        parse_args(&args(list))
    }

    fn config(list: &[&str]) -> RunConfig {
        match parse(list).unwrap() {
            Invocation::Run(config) => config,
            Invocation::Help => panic!("expected a run config"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = config(&["data.bin", "out.txt"]);
        assert_eq!(config.input, "data.bin");
        assert_eq!(config.sink, OutputSink::File("out.txt".into()));
        assert_eq!(config.width, UnitWidth::Byte);
        assert_eq!(config.endianness, Endianness::Little);
        assert_eq!(config.policy, SizePolicy::SplitTail);
        assert!(config.document.newline);
        assert_eq!(config.document.label, None);
    }

    #[test]
    fn test_width_flags() {
        assert_eq!(config(&["a", "-to-stdout", "-short"]).width, UnitWidth::Short);
        assert_eq!(config(&["a", "-to-stdout", "-word"]).width, UnitWidth::Word);
        // Later width flags override earlier ones.
        assert_eq!(
            config(&["a", "-to-stdout", "-word", "-byte"]).width,
            UnitWidth::Byte
        );
    }

    #[test]
    fn test_to_stdout_wins_over_missing_output() {
        let config = config(&["data.bin", "-to-stdout"]);
        assert_eq!(config.sink, OutputSink::Stdout);
    }

    #[test]
    fn test_missing_output_is_an_error() {
        let err = parse(&["data.bin"]).unwrap_err();
        assert!(err.to_string().contains("no output file"));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let err = parse(&["-to-stdout"]).unwrap_err();
        assert!(err.to_string().contains("no input file"));
    }

    #[test]
    fn test_unrecognized_option() {
        let err = parse(&["data.bin", "-to-stdout", "-frobnicate"]).unwrap_err();
        assert!(err.to_string().contains("unrecognized option '-frobnicate'"));
    }

    #[test]
    fn test_value_options() {
        let config = config(&[
            "data.bin",
            "-to-stdout",
            "-before",
            "ALIGN 4",
            "-after",
            "ALIGN 2",
        ]);
        assert_eq!(config.document.before.as_deref(), Some("ALIGN 4"));
        assert_eq!(config.document.after.as_deref(), Some("ALIGN 2"));
    }

    #[test]
    fn test_value_option_at_end_of_arguments() {
        let err = parse(&["data.bin", "-to-stdout", "-before"]).unwrap_err();
        assert!(err.to_string().contains("expects a value"));
    }

    #[test]
    fn test_value_option_followed_by_option() {
        let err = parse(&["data.bin", "-to-stdout", "-label", "-word"]).unwrap_err();
        assert!(err.to_string().contains("expects a literal value"));
    }

    #[test]
    fn test_last_of_define_and_label_wins() {
        let config_a = config(&["a", "-to-stdout", "-define", "FOO", "-label", "bar"]);
        assert_eq!(config_a.document.label, Some(Label::Plain("bar".into())));

        let config_b = config(&["a", "-to-stdout", "-label", "bar", "-define", "FOO"]);
        assert_eq!(config_b.document.label, Some(Label::Define("FOO".into())));
    }

    #[test]
    fn test_endianness_and_policy_flags() {
        let config = config(&["a", "b", "-big-endian", "-exact-size"]);
        assert_eq!(config.endianness, Endianness::Big);
        assert_eq!(config.policy, SizePolicy::Exact);
    }

    #[test]
    fn test_extra_positionals_are_ignored() {
        let config = config(&["a", "b", "c"]);
        assert_eq!(config.input, "a");
        assert_eq!(config.sink, OutputSink::File("b".into()));
    }

    #[test]
    fn test_help_short_circuits() {
        assert_eq!(parse(&["-help"]).unwrap(), Invocation::Help);
        assert_eq!(parse(&["data.bin", "-h"]).unwrap(), Invocation::Help);
    }
}
