//! Single-type lookups in either direction

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tfbridge_dtype::{to_engine_type, to_framework_type, EngineDataType, FrameworkDataType};

/// Arguments for the `to-engine` command
#[derive(Args, Debug)]
pub struct ToEngineArgs {
    /// TensorFlow type name (e.g. float, tf.float64, DT_INT64) or native TF_DataType code
    #[arg(value_name = "TYPE")]
    pub framework_type: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `to-framework` command
#[derive(Args, Debug)]
pub struct ToFrameworkArgs {
    /// Engine type name (e.g. float32, int64)
    #[arg(value_name = "TYPE")]
    pub engine_type: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// One resolved equivalence, as printed with `--json`
#[derive(Debug, Serialize)]
pub struct Equivalence {
    pub engine: EngineDataType,
    pub framework: FrameworkDataType,
    pub native_code: i32,
}

impl Equivalence {
    pub fn new(engine: EngineDataType, framework: FrameworkDataType) -> Self {
        Self {
            engine,
            framework,
            native_code: framework.native_code(),
        }
    }
}

/// Execute the `to-engine` command
pub fn execute_to_engine(args: ToEngineArgs) -> Result<()> {
    let framework = parse_framework_type(&args.framework_type)?;
    log::debug!(
        "Resolved TensorFlow type {:?} as {} (code {})",
        args.framework_type,
        framework,
        framework.native_code()
    );

    let engine = to_engine_type(framework)?;
    print_result(Equivalence::new(engine, framework), args.json, engine.as_str())
}

/// Execute the `to-framework` command
pub fn execute_to_framework(args: ToFrameworkArgs) -> Result<()> {
    let engine: EngineDataType = args
        .engine_type
        .parse()
        .with_context(|| format!("Invalid engine data type: {}", args.engine_type))?;

    let framework = to_framework_type(engine)?;
    print_result(
        Equivalence::new(engine, framework),
        args.json,
        framework.as_str(),
    )
}

/// Accept either a type name or a native `TF_DataType` code
fn parse_framework_type(input: &str) -> Result<FrameworkDataType> {
    let parsed = match input.trim().parse::<i32>() {
        Ok(code) => FrameworkDataType::from_native_code(code),
        Err(_) => input.parse(),
    };
    parsed.with_context(|| format!("Invalid TensorFlow data type: {}", input))
}

fn print_result(equivalence: Equivalence, json: bool, plain: &str) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&equivalence)?);
    } else {
        println!("{}", plain);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_framework_name_or_code() {
        assert_eq!(
            parse_framework_type("double").unwrap(),
            FrameworkDataType::Double
        );
        assert_eq!(parse_framework_type("9").unwrap(), FrameworkDataType::Int64);
        assert_eq!(parse_framework_type(" 4 ").unwrap(), FrameworkDataType::Uint8);
        assert!(parse_framework_type("6").is_err());
        assert!(parse_framework_type("half").is_err());
    }

    #[test]
    fn test_equivalence_json() {
        let value =
            serde_json::to_value(Equivalence::new(EngineDataType::Float64, FrameworkDataType::Double))
                .unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "engine": "float64",
                "framework": "double",
                "native_code": 2,
            })
        );
    }
}
