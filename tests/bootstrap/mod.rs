mod provision_admin;
mod status;
