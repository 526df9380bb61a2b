pub mod admin;
pub mod contact;
pub mod events;
pub mod internships;
pub mod public;
pub mod testimonials;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    internships::configure(cfg);
    events::configure(cfg);
    testimonials::configure(cfg);
    contact::configure(cfg);
    admin::configure(cfg);
}
