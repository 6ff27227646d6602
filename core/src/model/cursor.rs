//! Cursored collections. Cursors are followed manually by the caller:
//! pass `next_cursor` back in the options of the next call. A cursor of 0
//! means there are no more pages.

use serde::Deserialize;

use super::list::TwitterList;
use super::null_default;
use super::user::User;

/// A page of user ids (`friends/ids`, `followers/ids`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdList {
    pub ids: Vec<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub next_cursor: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub previous_cursor: i64,
}

/// A page of users (`friends/list`, `followers/list`, `lists/members`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserCollection {
    pub users: Vec<User>,
    #[serde(default, deserialize_with = "null_default")]
    pub next_cursor: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub previous_cursor: i64,
}

/// A page of lists (`lists/ownerships`, `lists/memberships`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListCollection {
    pub lists: Vec<TwitterList>,
    #[serde(default, deserialize_with = "null_default")]
    pub next_cursor: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub previous_cursor: i64,
}

macro_rules! impl_cursored {
    ($($ty:ty),*) => {$(
        impl $ty {
            pub fn has_next(&self) -> bool {
                self.next_cursor != 0
            }

            pub fn has_previous(&self) -> bool {
                self.previous_cursor != 0
            }
        }
    )*};
}

impl_cursored!(IdList, UserCollection, ListCollection);
