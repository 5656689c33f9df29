use super::ids::Uid;

/// Badge colors available for people. Every user and contact is assigned
/// one of these at creation and keeps it for life.
pub const USER_COLORS: [&str; 25] = [
    "#FDDC2F", "#33DA81", "#E98366", "#C27177", "#42F9B9", "#2AEC8B", "#6DD44A",
    "#C7ACC0", "#309CF4", "#B663F3", "#b579d2", "#809283", "#58AC47", "#2FB287",
    "#2AFDC3", "#D2FA60", "#A8EE51", "#A9DDC7", "#FE68C4", "#DC3DF5", "#05CDD7",
    "#E07D47", "#8EA906", "#36B3F0", "#BF59F2",
];

/// Deterministic color assignment: the same uid always maps to the same
/// palette entry, so badges stay stable across devices and sessions.
pub fn color_for(uid: &Uid) -> &'static str {
    USER_COLORS[palette_index(uid)]
}

fn palette_index(uid: &Uid) -> usize {
    // FNV-1a over the uid bytes.
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in uid.as_str().bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    (hash % USER_COLORS.len() as u64) as usize
}
