use crate::constants::ROOT_PATH;
use crate::error::RouteError;

/// Route paths are absolute. Anything after the leading slash is matched literally.
pub fn validate_route_path(path: &str) -> Result<(), RouteError> {
    if !path.starts_with(ROOT_PATH) {
        return Err(RouteError::InvalidPath(path.to_string()));
    }
    Ok(())
}
