//! Numeric reply codes the client reacts to.

/// RPL_WELCOME
pub const RPL_WELCOME: u16 = 1;
/// RPL_YOURHOST
pub const RPL_YOURHOST: u16 = 2;
/// RPL_CREATED
pub const RPL_CREATED: u16 = 3;
/// RPL_MYINFO
pub const RPL_MYINFO: u16 = 4;
/// RPL_ISUPPORT
pub const RPL_ISUPPORT: u16 = 5;
/// RPL_STATSCONN
pub const RPL_STATSCONN: u16 = 250;
/// RPL_LUSERCLIENT
pub const RPL_LUSERCLIENT: u16 = 251;
/// RPL_LUSEROP
pub const RPL_LUSEROP: u16 = 252;
/// RPL_LUSERUNKNOWN
pub const RPL_LUSERUNKNOWN: u16 = 253;
/// RPL_LUSERCHANNELS
pub const RPL_LUSERCHANNELS: u16 = 254;
/// RPL_LUSERME
pub const RPL_LUSERME: u16 = 255;
/// RPL_LOCALUSERS
pub const RPL_LOCALUSERS: u16 = 265;
/// RPL_GLOBALUSERS
pub const RPL_GLOBALUSERS: u16 = 266;
/// RPL_LIST: one channel of a `LIST` reply.
pub const RPL_LIST: u16 = 322;
/// RPL_LISTEND
pub const RPL_LISTEND: u16 = 323;
/// RPL_NAMREPLY: one batch of channel members.
pub const RPL_NAMREPLY: u16 = 353;
/// RPL_ENDOFNAMES
pub const RPL_ENDOFNAMES: u16 = 366;
/// RPL_INFO
pub const RPL_INFO: u16 = 371;
/// RPL_MOTD
pub const RPL_MOTD: u16 = 372;
/// RPL_MOTDSTART
pub const RPL_MOTDSTART: u16 = 375;
/// RPL_ENDOFMOTD
pub const RPL_ENDOFMOTD: u16 = 376;

/// Numerics shown to the user as plain server information.
pub const SERVER_INFO_NUMERICS: &[u16] = &[
    RPL_WELCOME,
    RPL_YOURHOST,
    RPL_CREATED,
    RPL_MYINFO,
    RPL_ISUPPORT,
    RPL_STATSCONN,
    RPL_LUSERCLIENT,
    RPL_LUSEROP,
    RPL_LUSERUNKNOWN,
    RPL_LUSERCHANNELS,
    RPL_LUSERME,
    RPL_LOCALUSERS,
    RPL_GLOBALUSERS,
    RPL_INFO,
    RPL_MOTD,
    RPL_MOTDSTART,
    RPL_ENDOFMOTD,
];

/// Verbs shown to the user as plain server information.
pub const SERVER_INFO_VERBS: &[&str] = &["NOTICE"];
