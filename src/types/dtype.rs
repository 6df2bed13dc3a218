//! Element types for typed arrays

/// Element type of a typed array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Bool,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl DType {
    pub const ALL: [DType; 11] = [
        DType::Bool,
        DType::U8,
        DType::I8,
        DType::U16,
        DType::I16,
        DType::U32,
        DType::I32,
        DType::U64,
        DType::I64,
        DType::F32,
        DType::F64,
    ];

    /// Size in bytes of a single element
    pub fn element_size(self) -> usize {
        match self {
            DType::Bool | DType::U8 | DType::I8 => 1,
            DType::U16 | DType::I16 => 2,
            DType::U32 | DType::I32 | DType::F32 => 4,
            DType::U64 | DType::I64 | DType::F64 => 8,
        }
    }

    /// Type name written to the `dtype` field of a tagged array
    pub fn name(self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::U8 => "uint8",
            DType::I8 => "int8",
            DType::U16 => "uint16",
            DType::I16 => "int16",
            DType::U32 => "uint32",
            DType::I32 => "int32",
            DType::U64 => "uint64",
            DType::I64 => "int64",
            DType::F32 => "float32",
            DType::F64 => "float64",
        }
    }

    /// Parse a type name.
    ///
    /// Accepts the plain names produced by [`DType::name`] as well as the
    /// little-endian array-protocol spellings (`"<f8"`, `"|u1"`, ...).
    /// Big-endian spellings are rejected since array bytes are always
    /// little-endian.
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(dtype) = Self::ALL.iter().copied().find(|d| d.name() == name) {
            return Some(dtype);
        }
        let code = name
            .strip_prefix('<')
            .or_else(|| name.strip_prefix('|'))
            .or_else(|| name.strip_prefix('='))
            .unwrap_or(name);
        match code {
            "b1" | "?" => Some(DType::Bool),
            "u1" => Some(DType::U8),
            "i1" => Some(DType::I8),
            "u2" => Some(DType::U16),
            "i2" => Some(DType::I16),
            "u4" => Some(DType::U32),
            "i4" => Some(DType::I32),
            "u8" => Some(DType::U64),
            "i8" => Some(DType::I64),
            "f4" => Some(DType::F32),
            "f8" => Some(DType::F64),
            _ => None,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, DType::F32 | DType::F64)
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for Rust element types that can back a typed array
pub trait ArrayType: Sized + Copy + 'static {
    const DTYPE: DType;

    /// Append the little-endian encoding of `self`
    fn write_le(self, out: &mut Vec<u8>);

    /// Read one element from exactly `DTYPE.element_size()` bytes
    fn read_le(bytes: &[u8]) -> Self;
}

macro_rules! impl_array_type {
    ($($ty:ty => $dtype:expr),* $(,)?) => {
        $(
            impl ArrayType for $ty {
                const DTYPE: DType = $dtype;

                fn write_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }

                fn read_le(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    buf.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(buf)
                }
            }
        )*
    };
}

impl_array_type! {
    u8 => DType::U8,
    i8 => DType::I8,
    u16 => DType::U16,
    i16 => DType::I16,
    u32 => DType::U32,
    i32 => DType::I32,
    u64 => DType::U64,
    i64 => DType::I64,
    f32 => DType::F32,
    f64 => DType::F64,
}

impl ArrayType for bool {
    const DTYPE: DType = DType::Bool;

    fn write_le(self, out: &mut Vec<u8>) {
        out.push(self as u8);
    }

    fn read_le(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}
