pub mod subscription_form;
