mod destination;
mod file_transfer;
mod image_scanner;
mod path_validator;

pub use destination::{
    Destination, allocate_destination, destination_folder_name, next_available_name,
};
pub use file_transfer::transfer_file;
pub use image_scanner::{FilePair, scan_image_pairs};
pub use path_validator::{validate_base_name, validate_directory_exists};
