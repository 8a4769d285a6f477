use banana::{make, registered_ids, Env, EnvError, ENV_ID};

#[test]
fn make_builds_registered_environment() {
    let mut env = make("Banana-v0").unwrap();
    env.seed(0);
    env.reset();
    env.step(0).unwrap();
    assert_eq!(env.action_size(), 21);
    assert_eq!(env.obs_size(), 1);
}

#[test]
fn unknown_ids_are_rejected() {
    let err = make("Apple-v0").err().unwrap();
    assert_eq!(err, EnvError::UnknownEnvironment("Apple-v0".to_string()));
    assert_eq!(err.to_string(), "no environment registered under id `Apple-v0`");
}

#[test]
fn registered_ids_lists_banana() {
    assert_eq!(registered_ids(), &[ENV_ID]);
}
