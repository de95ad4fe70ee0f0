pub mod landing_hero;
