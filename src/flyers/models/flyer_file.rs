/// Finished flyer ready to be sent back as a download.
#[derive(Debug, Clone)]
pub struct FlyerFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
