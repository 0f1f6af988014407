pub mod modules {
    pub mod eventos {
        pub mod core {
            pub mod errors;
            pub mod evento;
            pub mod fecha;
            pub mod ports;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod manage_eventos {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod filter_eventos {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_participantes {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod eventos_in_memory;
            }
        }
    }
}

pub mod shell;
