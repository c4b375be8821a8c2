pub enum ReplicateModelVersion {
    StableDiffusionXl,
}

impl ReplicateModelVersion {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::StableDiffusionXl => {
                "39ed52f2a78e934b3ba6e2a89f5b1c712de7dfea535525255b1aa35c5565e08b"
            }
        }
    }
}
