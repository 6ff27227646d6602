use crate::model::{IdList, UserCollection};
use crate::options::{FollowersIdsOptions, FollowersListOptions, FriendsIdsOptions, FriendsListOptions};

endpoint_group! {
    /// `followers/*` calls.
    FollowersRawEndpoint, FollowersEndpoint {
        fn get_ids(FollowersIdsOptions) -> IdList;
        fn get_list(FollowersListOptions) -> UserCollection;
    }
}

endpoint_group! {
    /// `friends/*` calls.
    FriendsRawEndpoint, FriendsEndpoint {
        fn get_ids(FriendsIdsOptions) -> IdList;
        fn get_list(FriendsListOptions) -> UserCollection;
    }
}
