//! Wire models shared by every frontend crate.
//!
//! These mirror the backend's JSON shapes one-to-one (camelCase field names);
//! anything the UI derives from them lives next to the views, not here.

mod group;
mod invite;
mod kurin;
mod proba;
mod user;

pub use group::{Group, GroupDetails, GroupForeman, InviteLinkResponse, ScoutInGroup};
pub use invite::{
    AcceptInviteResponse, GenerateInviteRequest, GenerateInviteResponse, InviteType,
    JoinGroupResponse,
};
pub use kurin::{Kurin, KurinDetails, KurinForeman, KurinLiaison};
pub use proba::{Proba, ProbaItem, ProbaNote, ProbaSection, Signer};
pub use user::{ForemanDetails, ForemanWithStats, KurinRef, LiaisonWithStats, Role, User};
