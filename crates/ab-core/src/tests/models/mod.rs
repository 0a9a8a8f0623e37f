mod contact;
mod credentials;
