pub mod jwt_validator;
