use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
        request,
    },
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use coursehub_adapters::config::AllowedOrigins;
use coursehub_axum::{
    ApiError, AuthState, UploadState, authenticate,
    routes::{
        create_course, delete_course, get_course, list_courses, login, signup, update_course,
        upload_image, upload_pdf, upload_video,
    },
};
use coursehub_core::{AssetStore, AuthValidator, CourseStore, ObjectStore, PasswordHasher, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Extra room on top of the file limit for multipart boundaries and headers.
const MULTIPART_OVERHEAD_BYTES: u64 = 64 * 1024;

/// The course platform API, mounted under `/api`.
pub struct CourseHubService {
    router: Router,
}

impl CourseHubService {
    /// Assemble the router from its collaborators.
    ///
    /// # Arguments
    /// * `auth_state` - user store, password hasher and token settings for signup/login
    /// * `course_store` - course repository
    /// * `upload_state` - object store, asset records, staging directory and size limit
    /// * `validator` - bearer token validator guarding every write route
    ///
    /// # Note on Architecture
    /// Each route group receives only the state it needs. Stores are cheap to
    /// clone (pools or `Arc`s inside).
    pub fn new<U, H, C, O, A, V>(
        auth_state: AuthState<U, H>,
        course_store: C,
        upload_state: UploadState<O, A>,
        validator: V,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        C: CourseStore + Clone + 'static,
        O: ObjectStore + Clone + 'static,
        A: AssetStore + Clone + 'static,
        V: AuthValidator<RequestParts = request::Parts>,
        V::Error: Into<ApiError>,
    {
        let body_limit = usize::try_from(upload_state.max_upload_bytes + MULTIPART_OVERHEAD_BYTES)
            .unwrap_or(usize::MAX);

        // Signup and login need the user store, hasher and token settings
        let auth_routes = Router::new()
            .route("/signup", post(signup::<U, H>))
            .route("/login", post(login::<U, H>))
            .with_state(auth_state);

        // Reading courses is public
        let public_course_routes = Router::new()
            .route("/courses", get(list_courses::<C>))
            .route("/courses/{id}", get(get_course::<C>))
            .with_state(course_store.clone());

        // Writing courses requires a valid bearer token
        let protected_course_routes = Router::new()
            .route("/courses", post(create_course::<C>))
            .route(
                "/courses/{id}",
                put(update_course::<C>).delete(delete_course::<C>),
            )
            .route_layer(from_fn_with_state(validator.clone(), authenticate::<V>))
            .with_state(course_store);

        // Uploads need the object store, asset records and staging directory
        let upload_routes = Router::new()
            .route("/uploadimage", post(upload_image::<O, A>))
            .route("/uploadvideo", post(upload_video::<O, A>))
            .route("/uploadpdf", post(upload_pdf::<O, A>))
            .route_layer(from_fn_with_state(validator, authenticate::<V>))
            .layer(DefaultBodyLimit::max(body_limit))
            .with_state(upload_state);

        let api = Router::new()
            .merge(auth_routes)
            .merge(public_course_routes)
            .merge(protected_course_routes)
            .merge(upload_routes);

        let router = Router::new().nest("/api", api);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Course hub listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
