//! Routing definitions for the Mizan site.
use yew_router::prelude::*;

use crate::nav::Page;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/programs")]
    Programs,
    #[at("/asrama")]
    Dormitories,
    #[at("/publications")]
    Publications,
    #[at("/news")]
    News,
    #[at("/donation")]
    Donation,
    #[at("/contact")]
    Contact,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Self::Home,
            Page::About => Self::About,
            Page::Programs => Self::Programs,
            Page::Dormitories => Self::Dormitories,
            Page::Publications => Self::Publications,
            Page::News => Self::News,
            Page::Donation => Self::Donation,
            Page::Contact => Self::Contact,
            Page::Admin => Self::Admin,
        }
    }
}
