//! Endpoint groups in two layers.
//!
//! A raw endpoint turns options into a request, sends it and returns the
//! `HttpResponse` untouched. The typed endpoint of the same group calls the
//! raw one and runs the result through `parse_response`. Both layers are
//! generated from one table per group, so each call is declared once with
//! its options type and body model.

macro_rules! endpoint_group {
    (
        $(#[$group_meta:meta])*
        $raw:ident, $typed:ident {
            $(
                $(#[$meta:meta])*
                fn $method:ident($options:ty) -> $body:ty;
            )*
        }
    ) => {
        $(#[$group_meta])*
        ///
        /// Returns raw responses.
        #[derive(Debug, Clone, Copy)]
        pub struct $raw<'a> {
            client: &'a $crate::client::TwitterOAuthClient,
        }

        impl<'a> $raw<'a> {
            pub(crate) fn new(client: &'a $crate::client::TwitterOAuthClient) -> Self {
                Self { client }
            }

            $(
                $(#[$meta])*
                pub fn $method(
                    &self,
                    options: impl Into<$options>,
                ) -> Result<$crate::http::HttpResponse, $crate::error::TwitterError> {
                    self.client.execute(&options.into())
                }
            )*
        }

        $(#[$group_meta])*
        ///
        /// Returns validated, parsed responses.
        #[derive(Debug, Clone, Copy)]
        pub struct $typed<'a> {
            raw: $raw<'a>,
        }

        impl<'a> $typed<'a> {
            pub(crate) fn new(client: &'a $crate::client::TwitterOAuthClient) -> Self {
                Self { raw: $raw::new(client) }
            }

            pub fn raw(&self) -> $raw<'a> {
                self.raw
            }

            $(
                $(#[$meta])*
                pub fn $method(
                    &self,
                    options: impl Into<$options>,
                ) -> Result<$crate::response::TwitterResponse<$body>, $crate::error::TwitterError> {
                    $crate::response::parse_response(self.raw.$method(options)?)
                }
            )*
        }
    };
}

mod account;
mod favorites;
mod geocode;
mod graph;
mod lists;
mod search;
mod statuses;
mod users;

pub use account::{AccountEndpoint, AccountRawEndpoint};
pub use favorites::{FavoritesEndpoint, FavoritesRawEndpoint};
pub use geocode::{GeocodeEndpoint, GeocodeRawEndpoint};
pub use graph::{FollowersEndpoint, FollowersRawEndpoint, FriendsEndpoint, FriendsRawEndpoint};
pub use lists::{ListsEndpoint, ListsRawEndpoint};
pub use search::{SearchEndpoint, SearchRawEndpoint};
pub use statuses::{StatusesEndpoint, StatusesRawEndpoint};
pub use users::{UsersEndpoint, UsersRawEndpoint};
