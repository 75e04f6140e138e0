pub mod bitbucket_adapter;
pub mod sonar_adapter;
