use crate::model::{ListCollection, TwitterList, UserCollection};
use crate::options::{
    AddMemberOptions, CreateListOptions, DeleteListOptions, GetListOptions, GetListsOptions, GetMembersOptions,
    GetMembershipsOptions, GetOwnershipsOptions, RemoveMemberOptions,
};

endpoint_group! {
    /// `lists/*` calls.
    ListsRawEndpoint, ListsEndpoint {
        fn get_list(GetListOptions) -> TwitterList;
        /// Lists the user subscribes to, including their own.
        fn get_lists(GetListsOptions) -> Vec<TwitterList>;
        fn get_ownerships(GetOwnershipsOptions) -> ListCollection;
        fn get_memberships(GetMembershipsOptions) -> ListCollection;
        fn get_members(GetMembersOptions) -> UserCollection;
        fn create_list(CreateListOptions) -> TwitterList;
        fn delete_list(DeleteListOptions) -> TwitterList;
        fn add_member(AddMemberOptions) -> TwitterList;
        fn remove_member(RemoveMemberOptions) -> TwitterList;
    }
}
