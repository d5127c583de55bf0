mod reference;
pub use self::reference::{LibrusID, Reference, TextOrNumber};

mod homework;
pub use self::homework::{HomeWorksResponse, HomeworkEntry, RawHomework};

mod listing;
pub use self::listing::{
    CategoriesResponse, NamedItem, SubjectsResponse, TokenInfo, User, UsersResponse,
};
