mod gimbal;
mod throttle;
