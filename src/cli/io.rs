//! JSON output for the CLI
//!
//! One JSON object per invocation, UTF-8, newline terminated.

use std::io::Write;

use serde_json::Value;

use super::errors::CliResult;

/// Write a success response
pub fn write_response<W: Write>(out: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });
    write_line(out, &response)
}

/// Write an error response
pub fn write_error<W: Write>(out: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_line(out, &response)
}

fn write_line<W: Write>(out: &mut W, response: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let mut out = Vec::new();
        write_error(&mut out, "AERO_CLI_IO_ERROR", "broken").unwrap();

        assert!(out.ends_with(b"\n"));
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["status"], "error");
        assert_eq!(parsed["code"], "AERO_CLI_IO_ERROR");
        assert_eq!(parsed["message"], "broken");
    }

    #[test]
    fn test_success_response_shape() {
        let mut out = Vec::new();
        write_response(&mut out, serde_json::json!({"count": 1})).unwrap();

        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["data"]["count"], 1);
    }
}
