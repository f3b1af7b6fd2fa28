mod courses;
mod helpers;
mod login;
mod signup;
mod uploads;
