// HTTP handlers - thin orchestration only:
// 1. Extract parameters from the request
// 2. Call the gateway
// 3. Transform the gateway result to an HTTP response

pub mod dynamo;
pub mod s3;
pub mod secret;
