/// Command used to invoke mtkclient.
pub const MTK_CLIENT_CMD: &str = "python mtkclient/mtk.py";

/// Extra arguments appended to every mtkclient invocation.
pub const MTK_CLIENT_ARGS: &str = "";

/// Pstore base address of an MT6833P (opal).
pub const PSTORE_ADDRESS: u64 = 0x4809_0000;

/// Pstore region size of an MT6833P (opal).
pub const PSTORE_SIZE: u64 = 0xe_0000;

/// The minimum length of a printable run reported as a string.
pub const MIN_STRING_LEN: usize = 4;

/// Shell used to run the mtkclient command line.
pub const SHELL: &str = "sh";

/// Prefix of every line forwarded from mtkclient to the console.
pub const CLIENT_LINE_PREFIX: &str = "[mtkclient]";
