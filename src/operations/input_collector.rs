use crate::camera_config::{CameraType, SerialMap};
use crate::errors::AppError;
use log::{debug, info, warn};
use serde_json::Value;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

/// Maps a menu choice to a camera type. Only "1" and "2" are accepted.
pub fn parse_camera_choice(choice: &str) -> Result<CameraType, AppError> {
    match choice.trim() {
        "1" => Ok(CameraType::TypeA),
        "2" => Ok(CameraType::TypeB),
        other => Err(AppError::InvalidSelection(format!(
            "'{}' is not a menu option, choose 1 or 2",
            other
        ))),
    }
}

/// Prompts until a valid camera type is chosen. Fails only if input ends.
pub fn select_camera_type<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<CameraType, AppError> {
    loop {
        writeln!(output, "Select camera type:")?;
        for (idx, camera_type) in CameraType::ALL.iter().enumerate() {
            writeln!(output, "{}. {}", idx + 1, camera_type)?;
        }
        write!(output, "Enter choice (1 or 2): ")?;
        output.flush()?;

        let line = read_line(input)?;
        match parse_camera_choice(&line) {
            Ok(camera_type) => {
                info!("📷 Camera type selected: {}", camera_type);
                return Ok(camera_type);
            }
            Err(e) => {
                debug!("Rejected camera type input: {}", e);
                writeln!(output, "Invalid selection. Please choose 1 or 2.")?;
            }
        }
    }
}

pub fn prompt_serials_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String, AppError> {
    write!(output, "Enter path to serial_numbers.json: ")?;
    output.flush()?;
    Ok(read_line(input)?.trim().to_string())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::Io("input closed before a value was entered".to_string()));
    }
    Ok(line)
}

/// Reads a JSON object of camera ID -> serial number. Keys and values are
/// returned exactly as written in the file.
pub fn load_serial_map(path: &str) -> Result<SerialMap, AppError> {
    if !Path::new(path).is_file() {
        return Err(AppError::NotFound(path.to_string()));
    }
    let contents = fs::read(path)?;
    let document: Value = serde_json::from_slice(&contents)
        .map_err(|e| AppError::Format(format!("'{}' is not valid JSON: {}", path, e)))?;

    let Value::Object(entries) = document else {
        return Err(AppError::Format("Expected a dictionary of serial numbers.".to_string()));
    };

    let mut serials = SerialMap::new();
    for (camera_id, serial) in entries {
        match serial {
            Value::String(serial) => {
                serials.insert(camera_id, serial);
            }
            other => {
                return Err(AppError::Format(format!(
                    "Serial number for camera '{}' must be a string, found {}",
                    camera_id, other
                )));
            }
        }
    }

    if serials.is_empty() {
        warn!("⚠️ Serial number file '{}' contains no cameras.", path);
    }
    debug!("Loaded {} serial numbers from '{}'", serials.len(), path);
    Ok(serials)
}
