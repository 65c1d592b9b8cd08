use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegaError {
    /// Represents a payload that, framed, needs more LSB slots than the carrier has samples
    #[error(
        "Capacity Error: the data needs {needed_bits} bits but the carrier image offers only {available_bits}"
    )]
    CapacityExceeded {
        needed_bits: usize,
        available_bits: usize,
    },

    /// Represents a bit sequence that ends inside a byte where a whole byte was expected
    #[error("Bit sequence of {0} bits is not byte aligned")]
    TruncatedBits(usize),

    /// Represents a legacy stego image without the 16 bit end marker
    #[error("No end marker found")]
    MarkerNotFound,

    /// Represents recovered data too short to even hold a frame header
    #[error("Incomplete header: only {0} bytes recovered")]
    IncompleteHeader(usize),

    /// Represents recovered data that does not start with the frame magic
    #[error("Invalid stego file: frame magic not found")]
    InvalidMagic,

    /// Represents a frame whose length field points beyond the recovered data
    #[error("Size mismatch: frame announces {expected} bytes, only {available} are available")]
    SizeMismatch { expected: usize, available: usize },

    /// Represents a payload whose content hash differs from the stored one
    #[error("Data corrupted: content hash does not match")]
    IntegrityFailure,

    /// Represents a type code outside the known text, image, audio and video codes
    #[error("Unsupported payload type code: {0}")]
    UnsupportedTypeCode(u8),

    /// Represents a type name that is neither a known name nor a code
    #[error("Unknown payload type: {0}")]
    UnknownPayloadType(String),

    /// Represents a payload that does not fit into the 32 bit length field
    #[error("Payload of {0} bytes is too large for a frame")]
    PayloadTooLarge(usize),

    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents an unveil of no secret data. For example when a media did not contain any secrets
    #[error("No secret data found")]
    NoSecretData,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing secret file")]
    MissingSecretFile,
}
