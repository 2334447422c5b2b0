/// Turns a declarative endpoint table into client methods.
///
/// Input is written as a trait so that it reads like the Alpaca interface it mirrors:
///
/// ```ignore
/// #[apply(rpc_trait)]
/// pub trait FilterWheel: Device {
///     /// Sets the filter wheel position.
///     #[http("position", method = Put)]
///     fn set_position(&self, #[http("Position")] position: i32) -> Result<()>;
/// }
/// ```
///
/// `trait Device` becomes a real trait whose default methods call through [`DeviceClient`](crate::DeviceClient).
/// Any other `trait Name: Device` becomes a `Name` struct owning a `DeviceClient` for
/// `DeviceType::Name`, implementing `Device` and exposing every listed endpoint as an inherent method.
///
/// `via = T` on a method deserializes `Value` as `T` and converts it into the declared return type.
/// `via = T` on a parameter converts the argument into `T` before encoding it.
///
/// `Device` and `Result` in the table are matched literally and emitted as crate paths, so the
/// calling module doesn't need to import them.
macro_rules! rpc_trait {
    (@param $param:ident) => ($param);
    (@param $param:ident, $via:ty) => (Into::<$via>::into($param));

    (
        $(# $attr:tt)*
        $pub:vis trait Device {
            $(
                $(#[doc = $doc:literal])*
                #[http($method_path:literal, method = $http_method:ident $(, via = $via:ty)?)]
                $(# $method_attr:tt)*
                fn $method_name:ident(
                    & $self:ident $(, #[http($param_query:literal $(, via = $param_via:ty)?)] $param:ident: $param_ty:ty)* $(,)?
                ) -> Result<$return_type:ty>;
            )*
        }
    ) => {
        $(# $attr)*
        $pub trait Device {
            /// The handle all requests go through.
            fn client(&self) -> &$crate::DeviceClient;

            $(
                $(#[doc = $doc])*
                $(# $method_attr)*
                fn $method_name(
                    & $self $(, $param: $param_ty)*
                ) -> $crate::Result<$return_type> {
                    $self.client()
                    .exec(
                        $crate::client::Method::$http_method,
                        $method_path,
                        &$crate::client::params! {
                            $($param_query: rpc_trait!(@param $param $(, $param_via)?),)*
                        },
                    )
                    $(.map(<$via>::into))?
                }
            )*
        }
    };

    (
        $(# $attr:tt)*
        $pub:vis trait $trait_name:ident: Device {
            $(
                $(#[doc = $doc:literal])*
                #[http($method_path:literal, method = $http_method:ident $(, via = $via:ty)?)]
                $(# $method_attr:tt)*
                fn $method_name:ident(
                    & $self:ident $(, #[http($param_query:literal $(, via = $param_via:ty)?)] $param:ident: $param_ty:ty)* $(,)?
                ) -> Result<$return_type:ty>;
            )*
        }
    ) => {
        $(# $attr)*
        #[derive(Debug, Clone)]
        $pub struct $trait_name {
            client: $crate::DeviceClient,
        }

        impl $trait_name {
            /// Device category served by this type.
            pub const TYPE: $crate::DeviceType = $crate::DeviceType::$trait_name;

            /// Handle for device `device_number` of this type at `address` (`host[:port]`),
            /// using the default configuration.
            pub fn new(address: impl Into<String>, device_number: u32) -> $crate::Result<Self> {
                Self::with_config(address, device_number, &$crate::ClientConfig::default())
            }

            /// Handle for device `device_number` of this type at `address` (`host[:port]`).
            pub fn with_config(
                address: impl Into<String>,
                device_number: u32,
                config: &$crate::ClientConfig,
            ) -> $crate::Result<Self> {
                $crate::DeviceClient::with_config(address, Self::TYPE, device_number, config)
                    .map(|client| Self { client })
            }

            $(
                $(#[doc = $doc])*
                $(# $method_attr)*
                pub fn $method_name(
                    & $self $(, $param: $param_ty)*
                ) -> $crate::Result<$return_type> {
                    $self.client
                    .exec(
                        $crate::client::Method::$http_method,
                        $method_path,
                        &$crate::client::params! {
                            $($param_query: rpc_trait!(@param $param $(, $param_via)?),)*
                        },
                    )
                    $(.map(<$via>::into))?
                }
            )*
        }

        impl $crate::api::Device for $trait_name {
            fn client(&self) -> &$crate::DeviceClient {
                &self.client
            }
        }

        impl TryFrom<$crate::DeviceClient> for $trait_name {
            type Error = $crate::Error;

            /// Wrap an existing handle, checking that it points at the right device category.
            fn try_from(client: $crate::DeviceClient) -> $crate::Result<Self> {
                let device_type = client.identity().device_type();
                if device_type == Self::TYPE {
                    Ok(Self { client })
                } else {
                    Err($crate::Error::InvalidArgument(format!(
                        "{} handle points at a {device_type}",
                        Self::TYPE,
                    )))
                }
            }
        }
    };
}

macro_rules! rpc_mod {
    ($(# $cfg:tt $trait_name:ident,)*) => (paste::paste! {
        $(
            # $cfg
            #[doc = "Types related to [`" $trait_name "`] devices."]
            pub mod [<$trait_name:snake>];

            # $cfg
            pub use [<$trait_name:snake>]::$trait_name;
        )*
    });
}
