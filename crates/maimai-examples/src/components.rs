//! Demo guards, interceptors, pipes and middleware
//!
//! Only their identity matters to the registry; what they would do at
//! request time is the dispatcher's business.

pub struct AuthGuard;
pub struct RoleGuard;
pub struct AdminGuard;

pub struct LoggingInterceptor;
pub struct TransformInterceptor;

pub struct ValidationPipe;
pub struct ParseIntPipe;

pub struct CorsMiddleware;
pub struct LoggingMiddleware;
