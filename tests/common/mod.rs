use archery_scorer::model::round::RoundGeometry;

// False positive
#[allow(unused)]
pub use self::paths::*;

/// Paths to round definitions
mod paths {
    #![allow(unused)]

    pub const WA_1440: &str = "./resources/rounds/wa_1440.round";
    pub const WA_18: &str = "./resources/rounds/wa_18.round";
    pub const YORK: &str = "./resources/rounds/york.round";
    pub const PORTSMOUTH: &str = "./resources/rounds/portsmouth.round";
    pub const WORCESTER: &str = "./resources/rounds/worcester.round";
}

#[macro_export]
#[rustfmt::skip]
macro_rules! test_round {
    ($path:expr) => {{
        #[cfg(not(any(feature = "async_tokio", feature = "async_std")))]
        { common::test_round($path) }
        #[cfg(any(feature = "async_tokio", feature = "async_std"))]
        { common::test_round($path).await }
    }};
}

#[cfg(not(any(feature = "async_tokio", feature = "async_std")))]
#[allow(unused)]
pub fn test_round(path: &str) -> RoundGeometry {
    RoundGeometry::from_path(path).unwrap()
}

#[cfg(any(feature = "async_tokio", feature = "async_std"))]
#[allow(unused)]
pub async fn test_round(path: &str) -> RoundGeometry {
    RoundGeometry::from_path(path).await.unwrap()
}

/// Decode a round outside of an async context, whichever reader is enabled.
#[cfg(not(any(feature = "async_tokio", feature = "async_std")))]
#[allow(unused)]
pub fn load_round(path: &str) -> RoundGeometry {
    test_round(path)
}

#[cfg(feature = "async_tokio")]
#[allow(unused)]
pub fn load_round(path: &str) -> RoundGeometry {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(test_round(path))
}

#[cfg(feature = "async_std")]
#[allow(unused)]
pub fn load_round(path: &str) -> RoundGeometry {
    async_std::task::block_on(test_round(path))
}
